//! Operator processors for WHERE and HAVING conditions.
//!
//! A [`Processor`] captures an operator and its operands. It renders against a
//! field that is either bound with [`Processor::on`] or supplied by the
//! mapping key it is stored under:
//!
//! ```ignore
//! use sqler::{Cond, entries, where_};
//!
//! // standalone
//! let a = Cond::from(where_("=", "a").on("fd1"));
//! // embedded in a mapping, the key supplies the field
//! let b = Cond::Map(entries! { "fd1" => where_("=", "a") });
//! // both render `fd1 = 'a'`
//! ```
//!
//! Every `where_*` constructor has a `having_*` twin with identical semantics.

use crate::condition::{Cond, make_conditions_string};
use crate::escape::escape;
use crate::value::{Raw, Value};
use std::fmt;

/// Operator and operands of a processor.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// `f op v`
    Compare { op: String, value: Value },
    /// `NOT f op v`
    NotCompare { op: String, value: Value },
    Like(Value),
    NotLike(Value),
    In(Value),
    NotIn(Value),
    Null,
    NotNull,
    Between(Value, Value),
    NotBetween(Value, Value),
    /// `EXISTS <subquery>`, rendered without a field.
    Exists(Raw),
    NotExists(Raw),
}

impl Primitive {
    fn needs_field(&self) -> bool {
        !matches!(self, Primitive::Exists(_) | Primitive::NotExists(_))
    }

    fn render(&self, field: &str) -> String {
        match self {
            Primitive::Compare { op, value } => format!("{field} {op} {}", escape(value)),
            Primitive::NotCompare { op, value } => format!("NOT {field} {op} {}", escape(value)),
            Primitive::Like(value) => format!("{field} LIKE {}", escape(value)),
            Primitive::NotLike(value) => format!("{field} NOT LIKE {}", escape(value)),
            Primitive::In(value) => format!("{field} IN ({})", escape(value)),
            Primitive::NotIn(value) => format!("{field} NOT IN ({})", escape(value)),
            Primitive::Null => format!("{field} IS NULL"),
            Primitive::NotNull => format!("{field} IS NOT NULL"),
            Primitive::Between(begin, end) => {
                format!("{field} BETWEEN {} AND {}", escape(begin), escape(end))
            }
            Primitive::NotBetween(begin, end) => {
                format!("{field} NOT BETWEEN {} AND {}", escape(begin), escape(end))
            }
            Primitive::Exists(subquery) => format!("EXISTS {subquery}"),
            Primitive::NotExists(subquery) => format!("NOT EXISTS {subquery}"),
        }
    }
}

/// A condition operator waiting for (or bound to) its field.
#[derive(Debug, Clone, PartialEq)]
pub struct Processor {
    field: Option<String>,
    primitive: Primitive,
}

impl Processor {
    /// Create an unbound processor.
    pub fn new(primitive: Primitive) -> Self {
        Self {
            field: None,
            primitive,
        }
    }

    /// Bind the field for standalone use.
    pub fn on(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn primitive(&self) -> &Primitive {
        &self.primitive
    }

    /// Render the condition.
    ///
    /// A bound field takes precedence over `context`. A processor that needs a
    /// field and has none renders nothing.
    pub fn render(&self, context: Option<&str>) -> String {
        if !self.primitive.needs_field() {
            return self.primitive.render("");
        }
        match self.field.as_deref().or(context).map(str::trim) {
            Some(field) if !field.is_empty() => self.primitive.render(field),
            _ => String::new(),
        }
    }
}

impl fmt::Display for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

macro_rules! processors {
    ($(
        $(#[$doc:meta])*
        $where_fn:ident / $having_fn:ident ( $($arg:ident : $ty:ty),* ) => $primitive:expr;
    )*) => {
        $(
            $(#[$doc])*
            pub fn $where_fn($($arg: $ty),*) -> Processor {
                Processor::new($primitive)
            }

            #[doc = concat!("HAVING twin of [`", stringify!($where_fn), "`].")]
            pub fn $having_fn($($arg: $ty),*) -> Processor {
                Processor::new($primitive)
            }
        )*
    };
}

processors! {
    /// `field op value`, e.g. `where_(">", 5)`.
    where_ / having (op: impl Into<String>, value: impl Into<Value>) =>
        Primitive::Compare { op: op.into(), value: value.into() };
    /// `NOT field op value`
    where_not / having_not (op: impl Into<String>, value: impl Into<Value>) =>
        Primitive::NotCompare { op: op.into(), value: value.into() };
    /// `field LIKE value`
    where_like / having_like (value: impl Into<Value>) => Primitive::Like(value.into());
    /// `field NOT LIKE value`
    where_not_like / having_not_like (value: impl Into<Value>) => Primitive::NotLike(value.into());
    /// `field IN (values)`; a scalar renders as a one-element list.
    where_in / having_in (values: impl Into<Value>) => Primitive::In(values.into());
    /// `field NOT IN (values)`
    where_not_in / having_not_in (values: impl Into<Value>) => Primitive::NotIn(values.into());
    /// `field IS NULL`
    where_null / having_null () => Primitive::Null;
    /// `field IS NOT NULL`
    where_not_null / having_not_null () => Primitive::NotNull;
    /// `field BETWEEN begin AND end`
    where_between / having_between (begin: impl Into<Value>, end: impl Into<Value>) =>
        Primitive::Between(begin.into(), end.into());
    /// `field NOT BETWEEN begin AND end`
    where_not_between / having_not_between (begin: impl Into<Value>, end: impl Into<Value>) =>
        Primitive::NotBetween(begin.into(), end.into());
    /// `EXISTS <subquery>`; pass the output of [`subquery`](crate::subquery).
    where_exists / having_exists (subquery: Raw) => Primitive::Exists(subquery);
    /// `NOT EXISTS <subquery>`
    where_not_exists / having_not_exists (subquery: Raw) => Primitive::NotExists(subquery);
}

/// Disjunction of condition expressions.
///
/// One expression renders `OR <expr>`, which joins the preceding condition
/// with `OR` when placed in a list. Several render `(<a> OR <b> ...)`.
/// Expressions that render nothing are skipped.
pub fn or<I, C>(exprs: I) -> Cond
where
    I: IntoIterator<Item = C>,
    C: Into<Cond>,
{
    let rendered: Vec<String> = exprs
        .into_iter()
        .map(|expr| make_conditions_string(&expr.into()))
        .filter(|s| !s.is_empty())
        .collect();

    let sql = match rendered.as_slice() {
        [] => String::new(),
        [single] => format!("OR {single}"),
        [first, rest @ ..] => {
            let mut sql = format!("({first}");
            for expr in rest {
                if expr.starts_with("OR ") {
                    sql.push(' ');
                } else {
                    sql.push_str(" OR ");
                }
                sql.push_str(expr);
            }
            sql.push(')');
            sql
        }
    };
    Cond::Sql(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries;
    use crate::value::raw;

    #[test]
    fn standalone_and_mapped_render_the_same() {
        let standalone = where_("=", "a").on("fd1").render(None);
        let mapped = where_("=", "a").render(Some("fd1"));
        assert_eq!(standalone, "fd1 = 'a'");
        assert_eq!(standalone, mapped);
    }

    #[test]
    fn bound_field_wins_over_context() {
        assert_eq!(where_null().on("fd1").render(Some("fd2")), "fd1 IS NULL");
    }

    #[test]
    fn unbound_without_context_renders_nothing() {
        assert_eq!(where_like("%a%").render(None), "");
        assert_eq!(where_like("%a%").on(" ").render(None), "");
    }

    #[test]
    fn primitives() {
        assert_eq!(where_not("<", 8).on("fd9").to_string(), "NOT fd9 < 8");
        assert_eq!(where_like("%hello%").on("fd1").to_string(), "fd1 LIKE '%hello%'");
        assert_eq!(
            where_not_like("%world%").on("fd2").to_string(),
            "fd2 NOT LIKE '%world%'"
        );
        assert_eq!(where_in(vec![1, 2, 3]).on("fd3").to_string(), "fd3 IN (1, 2, 3)");
        assert_eq!(where_not_in(1).on("fd1").to_string(), "fd1 NOT IN (1)");
        assert_eq!(where_not_null().on("fd6").to_string(), "fd6 IS NOT NULL");
        assert_eq!(
            where_between(10, 20).on("fd7").to_string(),
            "fd7 BETWEEN 10 AND 20"
        );
        assert_eq!(
            where_not_between(30, 40).on("fd8").to_string(),
            "fd8 NOT BETWEEN 30 AND 40"
        );
    }

    #[test]
    fn exists_ignores_fields() {
        let sq = raw("(SELECT * FROM tb2)");
        assert_eq!(where_exists(sq.clone()).to_string(), "EXISTS (SELECT * FROM tb2)");
        assert_eq!(
            where_not_exists(sq.clone()).render(Some("fd1")),
            "NOT EXISTS (SELECT * FROM tb2)"
        );
        assert_eq!(
            where_exists(sq).on("fd1").render(None),
            "EXISTS (SELECT * FROM tb2)"
        );
    }

    #[test]
    fn having_twins_match() {
        assert_eq!(having(">", 5).on("COUNT(fd1)"), where_(">", 5).on("COUNT(fd1)"));
        assert_eq!(having_in(vec!["a", "b"]), where_in(vec!["a", "b"]));
        assert_eq!(having_not_null(), where_not_null());
    }

    #[test]
    fn or_single() {
        assert_eq!(or(["fd1 = 1"]), Cond::Sql("OR fd1 = 1".to_string()));
        assert_eq!(
            or([Cond::Map(entries! { "fd2" => "a" })]),
            Cond::Sql("OR fd2 = 'a'".to_string())
        );
    }

    #[test]
    fn or_many_is_parenthesized() {
        let cond = or([
            Cond::Map(entries! { "fd1" => 1 }),
            Cond::from("fd2 = 'a'"),
            Cond::List(vec![
                Cond::Map(entries! { "fd3" => 2, "fd4" => where_(">", 3) }),
            ]),
            Cond::from(where_("<", 4).on("fd5")),
        ]);
        assert_eq!(
            cond,
            Cond::Sql("(fd1 = 1 OR fd2 = 'a' OR fd3 = 2 AND fd4 > 3 OR fd5 < 4)".to_string())
        );
    }

    #[test]
    fn nested_or_collapses_markers() {
        let cond = or([
            Cond::from("fd1 = 1"),
            or(["fd2 = 2"]),
            or([Cond::Map(entries! { "fd3" => "a" })]),
        ]);
        assert_eq!(cond, Cond::Sql("(fd1 = 1 OR fd2 = 2 OR fd3 = 'a')".to_string()));
    }

    #[test]
    fn or_skips_empty() {
        assert_eq!(or(Vec::<Cond>::new()), Cond::Sql(String::new()));
        assert_eq!(or(["", "fd1 = 1"]), Cond::Sql("OR fd1 = 1".to_string()));
    }
}
