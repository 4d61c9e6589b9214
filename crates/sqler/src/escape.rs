//! Literal quoting.
//!
//! [`quote`] renders a [`Value`] in PostgreSQL literal syntax. [`escape`] is
//! what the clause compilers call: it inlines [`Raw`](crate::Raw) fragments
//! verbatim and quotes everything else.

use crate::value::Value;
use std::fmt::Write;

/// Render a value as an SQL literal, inlining raw fragments verbatim.
pub fn escape(value: &Value) -> String {
    match value {
        Value::Raw(raw) => raw.as_str().to_string(),
        other => quote(other),
    }
}

/// Render a value as an SQL literal.
///
/// Lists are comma-joined for use inside `IN (...)`; a list nested in a list
/// is parenthesized. Raw fragments nested in lists are inlined.
pub fn quote(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => quote_float(*f),
        Value::Text(s) => quote_str(s),
        Value::Bytes(b) => quote_bytes(b),
        Value::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
        Value::Timestamp(ts) => format!("'{}'", ts.format("%Y-%m-%d %H:%M:%S%.f")),
        Value::TimestampTz(ts) => format!("'{}'", ts.format("%Y-%m-%d %H:%M:%S%.f%:z")),
        Value::List(items) => items
            .iter()
            .map(|item| match item {
                Value::List(_) => format!("({})", quote(item)),
                other => escape(other),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Raw(raw) => raw.as_str().to_string(),
    }
}

fn quote_float(f: f64) -> String {
    if f.is_nan() {
        "'NaN'".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "'Infinity'".to_string()
        } else {
            "'-Infinity'".to_string()
        }
    } else {
        f.to_string()
    }
}

/// Quote a string literal.
///
/// Plain strings only need `'` doubled. Strings with a backslash or a control
/// character use the `E'...'` form so the result does not depend on
/// `standard_conforming_strings`. NUL is not representable and is dropped.
pub fn quote_str(s: &str) -> String {
    let needs_escape_form = s.chars().any(|c| c == '\\' || c.is_control());
    let mut out = String::with_capacity(s.len() + 3);

    if !needs_escape_form {
        out.push('\'');
        for c in s.chars() {
            if c == '\'' {
                out.push('\'');
            }
            out.push(c);
        }
        out.push('\'');
        return out;
    }

    out.push_str("E'");
    for c in s.chars() {
        match c {
            '\0' => {}
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn quote_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + 12);
    out.push_str("'\\x");
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out.push_str("'::bytea");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::raw;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn scalars() {
        assert_eq!(quote(&Value::Null), "NULL");
        assert_eq!(quote(&Value::from(true)), "true");
        assert_eq!(quote(&Value::from(42)), "42");
        assert_eq!(quote(&Value::from(-1.5)), "-1.5");
        assert_eq!(quote(&Value::from(2.0)), "2");
        assert_eq!(quote(&Value::from(f64::NAN)), "'NaN'");
        assert_eq!(quote(&Value::from(f64::NEG_INFINITY)), "'-Infinity'");
    }

    #[test]
    fn strings_double_single_quotes() {
        assert_eq!(quote(&Value::from("a")), "'a'");
        assert_eq!(quote(&Value::from("it's")), "'it''s'");
    }

    #[test]
    fn strings_with_backslash_or_control_use_escape_form() {
        assert_eq!(quote(&Value::from(r"a\b")), r"E'a\\b'");
        assert_eq!(quote(&Value::from("a\nb's")), r"E'a\nb''s'");
        assert_eq!(quote(&Value::from("a\0b")), "E'ab'");
    }

    #[test]
    fn lists_are_comma_joined() {
        assert_eq!(quote(&Value::from(vec![1, 2, 3])), "1, 2, 3");
        assert_eq!(
            quote(&Value::List(vec![Value::from(1), Value::from("a")])),
            "1, 'a'"
        );
        assert_eq!(
            quote(&Value::List(vec![Value::from(vec![1, 2]), Value::from(vec![3])])),
            "(1, 2), (3)"
        );
    }

    #[test]
    fn bytes_and_dates() {
        assert_eq!(quote(&Value::bytes(vec![0x0a, 0xff])), r"'\x0aff'::bytea");
        let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(quote(&Value::from(d)), "'2024-02-29'");
        let ts = d.and_hms_opt(13, 5, 9).unwrap();
        assert_eq!(quote(&Value::from(ts)), "'2024-02-29 13:05:09'");
        let utc = Utc.from_utc_datetime(&ts);
        assert_eq!(quote(&Value::from(utc)), "'2024-02-29 13:05:09+00:00'");
    }

    #[test]
    fn escape_inlines_raw() {
        assert_eq!(escape(&Value::from(raw("NOW()"))), "NOW()");
        assert_eq!(escape(&Value::from("NOW()")), "'NOW()'");
    }
}
