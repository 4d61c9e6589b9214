//! INSERT and UPDATE payloads.

use crate::escape::escape;
use crate::value::Value;

/// An ordered `field -> value` row.
pub type Row = Vec<(String, Value)>;

/// What an INSERT writes.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertPayload {
    /// One row with named fields.
    Row(Row),
    /// Several rows; the field list is the ordered union of their keys.
    Rows(Vec<Row>),
    /// One positional tuple, no field list.
    Tuple(Vec<Value>),
    /// Several positional tuples, no field list.
    Tuples(Vec<Vec<Value>>),
}

impl From<Row> for InsertPayload {
    fn from(row: Row) -> Self {
        InsertPayload::Row(row)
    }
}

impl From<Vec<Row>> for InsertPayload {
    fn from(rows: Vec<Row>) -> Self {
        InsertPayload::Rows(rows)
    }
}

impl From<Vec<Value>> for InsertPayload {
    fn from(tuple: Vec<Value>) -> Self {
        InsertPayload::Tuple(tuple)
    }
}

impl From<Vec<Vec<Value>>> for InsertPayload {
    fn from(tuples: Vec<Vec<Value>>) -> Self {
        InsertPayload::Tuples(tuples)
    }
}

/// Compiled INSERT field list and value tuples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertInfos {
    /// `(f1, f2, ...)`, or empty for positional payloads.
    pub fields: String,
    /// `(v1, v2), (v3, v4)`
    pub values: String,
}

/// Compile an insert payload.
///
/// Fields missing from a row get `DEFAULT`. A field present with a `NULL`
/// value stays `NULL`.
pub fn sql_insert_infos(payload: &InsertPayload) -> InsertInfos {
    match payload {
        InsertPayload::Row(row) => named_rows(std::slice::from_ref(row)),
        InsertPayload::Rows(rows) => named_rows(rows),
        InsertPayload::Tuple(tuple) => positional_rows(std::slice::from_ref(tuple)),
        InsertPayload::Tuples(tuples) => positional_rows(tuples),
    }
}

fn field_list(rows: &[Row]) -> Vec<&str> {
    let mut fields: Vec<&str> = Vec::new();
    for row in rows {
        for (key, _) in row {
            if !fields.contains(&key.as_str()) {
                fields.push(key);
            }
        }
    }
    fields
}

fn named_rows(rows: &[Row]) -> InsertInfos {
    let fields = field_list(rows);
    if fields.is_empty() {
        return InsertInfos::default();
    }

    let values = rows
        .iter()
        .map(|row| {
            let tuple = fields
                .iter()
                .map(|field| {
                    row.iter()
                        .find(|(key, _)| key.as_str() == *field)
                        .map_or_else(|| "DEFAULT".to_string(), |(_, value)| escape(value))
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("({tuple})")
        })
        .collect::<Vec<_>>()
        .join(", ");

    InsertInfos {
        fields: format!("({})", fields.join(", ")),
        values,
    }
}

fn positional_rows(tuples: &[Vec<Value>]) -> InsertInfos {
    if tuples.iter().all(Vec::is_empty) {
        return InsertInfos::default();
    }

    let values = tuples
        .iter()
        .map(|tuple| {
            let inner = tuple.iter().map(escape).collect::<Vec<_>>().join(", ");
            format!("({inner})")
        })
        .collect::<Vec<_>>()
        .join(", ");

    InsertInfos {
        fields: String::new(),
        values,
    }
}

/// The SET body of an UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdatePayload {
    /// Verbatim SET body, trimmed.
    Verbatim(String),
    /// `field = value` pairs.
    Map(Row),
    /// Parts joined with `, `. Lists nested inside a list render nothing.
    List(Vec<UpdatePayload>),
}

impl From<&str> for UpdatePayload {
    fn from(s: &str) -> Self {
        UpdatePayload::Verbatim(s.to_string())
    }
}

impl From<String> for UpdatePayload {
    fn from(s: String) -> Self {
        UpdatePayload::Verbatim(s)
    }
}

impl From<Row> for UpdatePayload {
    fn from(row: Row) -> Self {
        UpdatePayload::Map(row)
    }
}

impl From<Vec<UpdatePayload>> for UpdatePayload {
    fn from(parts: Vec<UpdatePayload>) -> Self {
        UpdatePayload::List(parts)
    }
}

/// Compile the SET body of an UPDATE.
pub fn sql_update_infos(payload: &UpdatePayload) -> String {
    match payload {
        UpdatePayload::List(parts) => parts
            .iter()
            .map(update_part)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => update_part(other),
    }
}

fn update_part(part: &UpdatePayload) -> String {
    match part {
        UpdatePayload::Verbatim(s) => s.trim().to_string(),
        UpdatePayload::Map(row) => row
            .iter()
            .map(|(key, value)| format!("{key} = {}", escape(value)))
            .collect::<Vec<_>>()
            .join(", "),
        UpdatePayload::List(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries;
    use crate::value::raw;

    #[test]
    fn single_row() {
        let infos = sql_insert_infos(&InsertPayload::Row(entries! {
            "fd1" => 1,
            "fd2" => "a",
            "fd3" => raw("NOW()"),
        }));
        assert_eq!(infos.fields, "(fd1, fd2, fd3)");
        assert_eq!(infos.values, "(1, 'a', NOW())");
    }

    #[test]
    fn rows_fill_missing_fields_with_default() {
        let infos = sql_insert_infos(&InsertPayload::Rows(vec![
            entries! { "fd1" => 1, "fd2" => "a" },
            entries! { "fd1" => 2, "fd3" => raw("NOW()") },
        ]));
        assert_eq!(infos.fields, "(fd1, fd2, fd3)");
        assert_eq!(infos.values, "(1, 'a', DEFAULT), (2, DEFAULT, NOW())");
    }

    #[test]
    fn every_tuple_has_one_value_per_field() {
        let rows = vec![
            entries! { "a" => 1 },
            entries! { "b" => 2, "a" => 3 },
            entries! { "c" => 4 },
        ];
        let infos = sql_insert_infos(&InsertPayload::Rows(rows));
        assert_eq!(infos.fields, "(a, b, c)");
        assert_eq!(
            infos.values,
            "(1, DEFAULT, DEFAULT), (3, 2, DEFAULT), (DEFAULT, DEFAULT, 4)"
        );
    }

    #[test]
    fn present_null_is_not_default() {
        let infos = sql_insert_infos(&InsertPayload::Row(entries! {
            "fd1" => Value::Null,
            "fd2" => 0,
        }));
        assert_eq!(infos.values, "(NULL, 0)");
    }

    #[test]
    fn positional_tuples() {
        let infos = sql_insert_infos(&InsertPayload::Tuples(vec![
            vec![1.into(), "a".into()],
            vec![2.into(), raw("NOW()").into()],
        ]));
        assert_eq!(infos.fields, "");
        assert_eq!(infos.values, "(1, 'a'), (2, NOW())");

        let infos = sql_insert_infos(&InsertPayload::Tuple(vec![1.into(), "a".into()]));
        assert_eq!(infos.values, "(1, 'a')");
    }

    #[test]
    fn empty_rows() {
        let infos = sql_insert_infos(&InsertPayload::Rows(vec![]));
        assert_eq!(infos, InsertInfos::default());
        let infos = sql_insert_infos(&InsertPayload::Rows(vec![vec![]]));
        assert_eq!(infos, InsertInfos::default());
    }

    #[test]
    fn empty_tuples() {
        assert_eq!(
            sql_insert_infos(&InsertPayload::Tuples(vec![])),
            InsertInfos::default()
        );
        assert_eq!(
            sql_insert_infos(&InsertPayload::Tuple(vec![])),
            InsertInfos::default()
        );
    }

    #[test]
    fn update_shapes() {
        assert_eq!(sql_update_infos(&" fd1 = 1 ".into()), "fd1 = 1");
        assert_eq!(
            sql_update_infos(&UpdatePayload::Map(entries! {
                "fd1" => 1,
                "fd2" => "a",
                "fd3" => raw("NOW()"),
            })),
            "fd1 = 1, fd2 = 'a', fd3 = NOW()"
        );
        assert_eq!(
            sql_update_infos(&UpdatePayload::List(vec![
                "fd1 = fd1 + 1".into(),
                UpdatePayload::Map(entries! { "fd2" => "b" }),
                UpdatePayload::List(vec!["fd3 = 3".into()]),
                "  ".into(),
            ])),
            "fd1 = fd1 + 1, fd2 = 'b'"
        );
    }
}
