use crate::error::SqlerResult;
use std::fmt;

/// Kind of statement an options record compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// UNION / UNION ALL of SELECTs
    Union,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
}

impl StatementKind {
    /// Whether the statement returns rows rather than an affected count.
    pub fn returns_rows(&self) -> bool {
        matches!(self, StatementKind::Select | StatementKind::Union)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Union => "UNION",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base trait for statement options.
pub trait Statement: Sync {
    /// Compile the statement into literal SQL.
    fn to_sql(&self) -> SqlerResult<String>;

    /// The statement kind.
    fn kind(&self) -> StatementKind;
}

impl<S: Statement + ?Sized> Statement for &S {
    fn to_sql(&self) -> SqlerResult<String> {
        (**self).to_sql()
    }

    fn kind(&self) -> StatementKind {
        (**self).kind()
    }
}
