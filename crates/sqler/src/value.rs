//! Literal operands for generated SQL.
//!
//! [`Value`] is what ends up inside a statement after quoting: the right-hand
//! side of `field = ...`, the members of `IN (...)`, the tuples of an INSERT.
//! [`Raw`] marks SQL text that must be inlined as-is instead of quoted
//! (`NOW()`, a subquery, `DEFAULT`).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::fmt;

/// Raw SQL inlined verbatim by [`escape`](crate::escape::escape).
///
/// # Safety
/// Be careful with SQL injection when building raw fragments from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw(String);

impl Raw {
    /// Wrap a SQL fragment.
    pub fn new(sql: impl Into<String>) -> Self {
        Raw(sql.into())
    }

    /// The wrapped SQL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the SQL text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Create a raw SQL value, e.g. `raw("NOW()")`.
pub fn raw(sql: impl Into<String>) -> Raw {
    Raw::new(sql)
}

/// A literal operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
    /// Comma-joined when quoted; used for `IN (...)`.
    List(Vec<Value>),
    /// Inlined without quoting.
    Raw(Raw),
}

impl Value {
    /// Create a byte-string value.
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u16, u32);

/// Values above `i64::MAX` become an exact numeric literal.
impl From<u64> for Value {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(v) => Value::Int(v),
            Err(_) => Value::Raw(Raw::new(v.to_string())),
        }
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::from(v as u64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::TimestampTz(v)
    }
}

impl From<Raw> for Value {
    fn from(v: Raw) -> Self {
        Value::Raw(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Int(i),
                (None, Some(u)) => Value::from(u),
                (None, None) => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            obj @ serde_json::Value::Object(_) => Value::Text(obj.to_string()),
        }
    }
}

/// Build an ordered `Vec<(String, V)>` mapping, converting each value with `Into`.
///
/// The target value type is taken from context, so the same macro builds
/// condition maps, insert rows, update maps and field maps.
///
/// ```ignore
/// use sqler::{entries, Cond, where_};
///
/// let cond = Cond::Map(entries! { "fd1" => 1, "fd2" => where_(">", 5) });
/// ```
#[macro_export]
macro_rules! entries {
    () => { ::std::vec::Vec::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {
        ::std::vec![$((::std::string::String::from($key), ::core::convert::Into::into($value))),+]
    };
}
