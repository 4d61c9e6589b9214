//! Table references and JOIN clauses.

use crate::error::{SqlerError, SqlerResult};

/// A table name, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRef {
    /// `tb1`
    Name(String),
    /// `tb1 AS a`
    Aliased { name: String, alias: String },
}

impl TableRef {
    /// Create a plain table reference.
    pub fn name(name: impl Into<String>) -> Self {
        TableRef::Name(name.into())
    }

    /// Create an aliased table reference.
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        TableRef::Aliased {
            name: name.into(),
            alias: alias.into(),
        }
    }

    /// The name other clauses use to qualify columns: the alias if any.
    pub fn display_name(&self) -> &str {
        match self {
            TableRef::Name(name) => name.trim(),
            TableRef::Aliased { alias, .. } => alias.trim(),
        }
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        TableRef::Name(name.to_string())
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        TableRef::Name(name)
    }
}

impl<N: Into<String>, A: Into<String>> From<(N, A)> for TableRef {
    fn from((name, alias): (N, A)) -> Self {
        TableRef::aliased(name, alias)
    }
}

/// Render the table expression of a statement.
///
/// A missing or blank table name fails with [`SqlerError::InvalidTableName`];
/// an aliased reference without both a name and an alias fails with
/// [`SqlerError::NoTableEntry`].
pub fn sql_table(table: Option<&TableRef>) -> SqlerResult<String> {
    match table {
        Some(TableRef::Name(name)) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        Some(TableRef::Aliased { name, alias })
            if !name.trim().is_empty() && !alias.trim().is_empty() =>
        {
            Ok(format!("{} AS {}", name.trim(), alias.trim()))
        }
        Some(TableRef::Aliased { .. }) => Err(SqlerError::NoTableEntry),
        _ => Err(SqlerError::InvalidTableName),
    }
}

/// Supported join kinds. Unknown kinds fall back to INNER.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Cross,
}

impl JoinKind {
    /// Parse a join kind case-insensitively, defaulting to [`JoinKind::Inner`].
    pub fn parse(kind: &str) -> Self {
        match kind.trim().to_ascii_uppercase().as_str() {
            "LEFT" => JoinKind::Left,
            "RIGHT" => JoinKind::Right,
            "CROSS" => JoinKind::Cross,
            _ => JoinKind::Inner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Cross => "CROSS",
        }
    }
}

/// One JOIN: kind, target table and the `(left field, right field)` pair.
///
/// The left field belongs to the previous table in the join chain, the right
/// field to `table`. A join missing any of the three parts is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Join {
    pub kind: String,
    pub table: Option<TableRef>,
    pub on: Option<(String, String)>,
}

impl Join {
    /// Create a join of the given kind.
    pub fn new(
        kind: impl Into<String>,
        table: impl Into<TableRef>,
        on: (impl Into<String>, impl Into<String>),
    ) -> Self {
        Self {
            kind: kind.into(),
            table: Some(table.into()),
            on: Some((on.0.into(), on.1.into())),
        }
    }

    /// Create an INNER JOIN.
    pub fn inner(table: impl Into<TableRef>, on: (impl Into<String>, impl Into<String>)) -> Self {
        Self::new("INNER", table, on)
    }

    /// Create a LEFT JOIN.
    pub fn left(table: impl Into<TableRef>, on: (impl Into<String>, impl Into<String>)) -> Self {
        Self::new("LEFT", table, on)
    }

    /// Create a RIGHT JOIN.
    pub fn right(table: impl Into<TableRef>, on: (impl Into<String>, impl Into<String>)) -> Self {
        Self::new("RIGHT", table, on)
    }

    /// Create a CROSS JOIN.
    pub fn cross(table: impl Into<TableRef>, on: (impl Into<String>, impl Into<String>)) -> Self {
        Self::new("CROSS", table, on)
    }
}

/// Render the JOIN clauses of a SELECT.
///
/// Joins form a chain: each join's left side is the table introduced by the
/// join before it, starting from `base`.
pub fn sql_join(base: Option<&TableRef>, joins: &[Join]) -> SqlerResult<String> {
    let mut left = base;
    let mut parts = Vec::with_capacity(joins.len());

    for join in joins {
        let sql = parse_join(left, join)?;
        if !sql.is_empty() {
            parts.push(sql);
        }
        if let Some(table) = join_target(join) {
            left = Some(table);
        }
    }

    Ok(parts.join(" "))
}

/// The join's table, unless it is absent or a blank name.
fn join_target(join: &Join) -> Option<&TableRef> {
    join.table
        .as_ref()
        .filter(|table| !matches!(table, TableRef::Name(name) if name.trim().is_empty()))
}

fn parse_join(left: Option<&TableRef>, join: &Join) -> SqlerResult<String> {
    let (Some(left), Some(right), Some((on_left, on_right))) =
        (left, join_target(join), join.on.as_ref())
    else {
        return Ok(String::new());
    };
    if join.kind.trim().is_empty() {
        return Ok(String::new());
    }

    Ok(format!(
        "{} JOIN {} ON {}.{} = {}.{}",
        JoinKind::parse(&join.kind).as_str(),
        sql_table(Some(right))?,
        left.display_name(),
        on_left,
        right.display_name(),
        on_right
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_is_trimmed() {
        assert_eq!(sql_table(Some(&" tb1 ".into())).unwrap(), "tb1");
    }

    #[test]
    fn table_alias() {
        assert_eq!(sql_table(Some(&("tb1", "a").into())).unwrap(), "tb1 AS a");
    }

    #[test]
    fn table_is_idempotent_under_retrim() {
        let once = sql_table(Some(&"  tb1  ".into())).unwrap();
        let twice = sql_table(Some(&TableRef::Name(once.clone()))).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_table_is_invalid() {
        assert!(matches!(sql_table(None), Err(SqlerError::InvalidTableName)));
        assert!(matches!(
            sql_table(Some(&"   ".into())),
            Err(SqlerError::InvalidTableName)
        ));
    }

    #[test]
    fn empty_alias_entry_is_no_table_entry() {
        assert!(matches!(
            sql_table(Some(&("", "").into())),
            Err(SqlerError::NoTableEntry)
        ));
        assert!(matches!(
            sql_table(Some(&("tb1", " ").into())),
            Err(SqlerError::NoTableEntry)
        ));
    }

    #[test]
    fn join_without_aliases() {
        let base = TableRef::from("tb1");
        let sql = sql_join(Some(&base), &[Join::new("inner", "tb2", ("fd11", "fd21"))]).unwrap();
        assert_eq!(sql, "INNER JOIN tb2 ON tb1.fd11 = tb2.fd21");
    }

    #[test]
    fn join_with_first_alias() {
        let base = TableRef::from(("tb1", "a"));
        let sql = sql_join(Some(&base), &[Join::new("left", "tb2", ("fd11", "fd21"))]).unwrap();
        assert_eq!(sql, "LEFT JOIN tb2 ON a.fd11 = tb2.fd21");
    }

    #[test]
    fn join_with_second_alias() {
        let base = TableRef::from("tb1");
        let sql = sql_join(
            Some(&base),
            &[Join::new("right", ("tb2", "b"), ("fd11", "fd21"))],
        )
        .unwrap();
        assert_eq!(sql, "RIGHT JOIN tb2 AS b ON tb1.fd11 = b.fd21");
    }

    #[test]
    fn join_chain_uses_previous_table() {
        let base = TableRef::from(("tb1", "a"));
        let joins = [
            Join::left(("tb2", "b"), ("fd11", "fd21")),
            Join::right(("tb3", "c"), ("fd21", "fd31")),
        ];
        assert_eq!(
            sql_join(Some(&base), &joins).unwrap(),
            "LEFT JOIN tb2 AS b ON a.fd11 = b.fd21 RIGHT JOIN tb3 AS c ON b.fd21 = c.fd31"
        );
    }

    #[test]
    fn unknown_kind_falls_back_to_inner() {
        let base = TableRef::from("tb1");
        let sql = sql_join(Some(&base), &[Join::new("outer", "tb2", ("a", "b"))]).unwrap();
        assert_eq!(sql, "INNER JOIN tb2 ON tb1.a = tb2.b");
    }

    #[test]
    fn incomplete_joins_are_skipped() {
        let base = TableRef::from("tb1");
        let joins = [
            Join::default(),
            Join {
                kind: "left".to_string(),
                table: Some("tb2".into()),
                on: None,
            },
            Join {
                kind: String::new(),
                table: Some("tb3".into()),
                on: Some(("a".to_string(), "b".to_string())),
            },
        ];
        assert_eq!(sql_join(Some(&base), &joins).unwrap(), "");
        assert_eq!(sql_join(Some(&base), &[]).unwrap(), "");
    }

    #[test]
    fn blank_join_target_is_skipped_and_keeps_chain() {
        let base = TableRef::from("tb1");
        let joins = [
            Join::new("left", "", ("a", "b")),
            Join::new("left", "  ", ("a", "b")),
            Join::left("tb2", ("a", "b")),
        ];
        assert_eq!(
            sql_join(Some(&base), &joins).unwrap(),
            "LEFT JOIN tb2 ON tb1.a = tb2.b"
        );
    }

    #[test]
    fn join_target_with_empty_alias_entry_fails() {
        let base = TableRef::from("tb1");
        let err = sql_join(Some(&base), &[Join::inner(("", ""), ("a", "b"))]).unwrap_err();
        assert!(matches!(err, SqlerError::NoTableEntry));
    }
}
