//! WHERE / HAVING condition expressions.
//!
//! A [`Cond`] is flattened into a list of condition strings which are then
//! folded with `AND`. An element starting with the `OR ` marker (see
//! [`or`](crate::or)) is joined with a plain space instead, which turns
//! `["A", or(["B"])]` into `A OR B`.

use crate::clause::order::{GroupBy, sql_group_by};
use crate::escape::escape;
use crate::processor::Processor;
use crate::value::{Raw, Value};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A condition expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// Verbatim SQL, trimmed. Blank strings contribute nothing.
    Sql(String),
    /// An operator processor rendered without a context field.
    Processor(Processor),
    /// Flattened in order.
    List(Vec<Cond>),
    /// `field -> value` entries, in order.
    Map(Vec<(String, CondValue)>),
}

/// The value side of a [`Cond::Map`] entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CondValue {
    /// `field = v`, or `field IN (...)` for a list. Raw fragments render
    /// `field = <raw>` unless they already start with the field.
    Value(Value),
    /// Rendered with the entry key as its field.
    Processor(Processor),
}

impl From<&str> for Cond {
    fn from(sql: &str) -> Self {
        Cond::Sql(sql.to_string())
    }
}

impl From<String> for Cond {
    fn from(sql: String) -> Self {
        Cond::Sql(sql)
    }
}

impl From<Processor> for Cond {
    fn from(p: Processor) -> Self {
        Cond::Processor(p)
    }
}

impl From<Vec<Cond>> for Cond {
    fn from(list: Vec<Cond>) -> Self {
        Cond::List(list)
    }
}

impl From<Vec<&str>> for Cond {
    fn from(list: Vec<&str>) -> Self {
        Cond::List(list.into_iter().map(Cond::from).collect())
    }
}

impl From<Vec<(String, CondValue)>> for Cond {
    fn from(entries: Vec<(String, CondValue)>) -> Self {
        Cond::Map(entries)
    }
}

impl From<Processor> for CondValue {
    fn from(p: Processor) -> Self {
        CondValue::Processor(p)
    }
}

macro_rules! cond_value_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for CondValue {
                fn from(v: $t) -> Self {
                    CondValue::Value(Value::from(v))
                }
            }
        )*
    };
}

cond_value_from!(
    i8,
    i16,
    i32,
    i64,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    bool,
    &str,
    String,
    &String,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
    Raw,
    serde_json::Value,
);

impl From<Value> for CondValue {
    fn from(v: Value) -> Self {
        CondValue::Value(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for CondValue {
    fn from(v: Option<T>) -> Self {
        CondValue::Value(v.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for CondValue {
    fn from(v: Vec<T>) -> Self {
        CondValue::Value(v.into())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for CondValue {
    fn from(v: [T; N]) -> Self {
        CondValue::Value(v.into())
    }
}

/// Flatten a condition into its list of condition strings.
pub fn parse_conditions(cond: &Cond) -> Vec<String> {
    let mut out = Vec::new();
    flatten(cond, &mut out);
    out
}

fn flatten(cond: &Cond, out: &mut Vec<String>) {
    match cond {
        Cond::Sql(sql) => push_non_empty(out, sql.trim().to_string()),
        Cond::Processor(p) => push_non_empty(out, p.render(None)),
        Cond::List(items) => {
            for item in items {
                flatten(item, out);
            }
        }
        Cond::Map(entries) => {
            for (field, value) in entries {
                push_non_empty(out, map_entry(field, value));
            }
        }
    }
}

fn push_non_empty(out: &mut Vec<String>, s: String) {
    if !s.is_empty() {
        out.push(s);
    }
}

fn map_entry(field: &str, value: &CondValue) -> String {
    match value {
        CondValue::Processor(p) => p.render(Some(field)),
        CondValue::Value(list @ Value::List(_)) => format!("{field} IN ({})", escape(list)),
        CondValue::Value(Value::Raw(raw)) => {
            let sql = raw.as_str();
            if sql.starts_with(&format!("{field} ")) {
                sql.to_string()
            } else {
                format!("{field} = {sql}")
            }
        }
        CondValue::Value(v) => format!("{field} = {}", escape(v)),
    }
}

/// Fold a condition into one boolean expression.
///
/// Elements are joined with ` AND `, except elements starting with `OR `
/// which are joined with a single space. A leading `OR ` is dropped.
pub fn make_conditions_string(cond: &Cond) -> String {
    let exprs = parse_conditions(cond);
    let mut result = String::new();
    for (i, expr) in exprs.iter().enumerate() {
        if i == 0 {
            result.push_str(expr);
        } else if expr.starts_with("OR ") {
            result.push(' ');
            result.push_str(expr);
        } else {
            result.push_str(" AND ");
            result.push_str(expr);
        }
    }
    match result.strip_prefix("OR ") {
        Some(rest) => rest.to_string(),
        None => result,
    }
}

/// Render `WHERE ...`, or nothing.
pub fn sql_where(wheres: Option<&Cond>) -> String {
    keyword_clause("WHERE", wheres)
}

/// Render `HAVING ...`, or nothing. HAVING without a GROUP BY renders nothing.
pub fn sql_having(group_by: Option<&GroupBy>, havings: Option<&Cond>) -> String {
    if sql_group_by(group_by).is_empty() {
        return String::new();
    }
    keyword_clause("HAVING", havings)
}

fn keyword_clause(keyword: &str, cond: Option<&Cond>) -> String {
    let body = cond.map(make_conditions_string).unwrap_or_default();
    if body.is_empty() {
        String::new()
    } else {
        format!("{keyword} {body}")
    }
}
