use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqler::{
    Cond, CondValue, InsertOptions, InsertPayload, SelectOptions, Value, insert, or, select,
    where_,
};

/// SELECT col0, col1, ... FROM t WHERE col0 = 0 AND col1 > 1 ...
fn build_select(n: usize) -> SelectOptions {
    let fields: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let wheres: Vec<(String, CondValue)> = (0..n)
        .map(|i| {
            let value = if i % 2 == 0 {
                CondValue::from(i as i64)
            } else {
                CondValue::from(where_(">", i as i64))
            };
            (format!("col{i}"), value)
        })
        .collect();

    SelectOptions::new("t")
        .fields(fields)
        .wheres(Cond::Map(wheres))
        .order_by("col0")
        .limit(20)
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/select");

    for n in [1, 5, 10, 50, 100] {
        let opts = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &opts, |b, opts| {
            b.iter(|| black_box(select(opts)));
        });
    }

    group.finish();
}

fn bench_build_and_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/build_and_select");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let opts = build_select(n);
                black_box(select(&opts))
            });
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/in_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        let opts = SelectOptions::new("t").wheres(Cond::Map(vec![(
            "id".to_string(),
            CondValue::from(values),
        )]));
        group.bench_with_input(BenchmarkId::from_parameter(n), &opts, |b, opts| {
            b.iter(|| black_box(select(opts)));
        });
    }

    group.finish();
}

fn bench_or_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/or_fold");

    for n in [1, 5, 10, 50] {
        let exprs: Vec<Cond> = (0..n)
            .map(|i| Cond::from(where_("=", i as i64).on(format!("col{i}"))))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &exprs, |b, exprs| {
            b.iter(|| {
                let opts = SelectOptions::new("t").wheres(or(exprs.iter().cloned()));
                black_box(select(&opts))
            });
        });
    }

    group.finish();
}

fn bench_insert_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_builder/insert_rows");

    for n in [1, 10, 100, 1000] {
        let rows: Vec<Vec<(String, Value)>> = (0..n)
            .map(|i| {
                let mut row = vec![("id".to_string(), Value::from(i as i64))];
                // Sparse rows exercise the DEFAULT fill.
                if i % 3 != 0 {
                    row.push(("name".to_string(), Value::from(format!("user{i}"))));
                }
                row
            })
            .collect();
        let opts = InsertOptions::new("t").infos(InsertPayload::Rows(rows));

        group.bench_with_input(BenchmarkId::from_parameter(n), &opts, |b, opts| {
            b.iter(|| black_box(insert(opts)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_select,
    bench_build_and_select,
    bench_in_list,
    bench_or_fold,
    bench_insert_rows
);
criterion_main!(benches);
