use super::assemble;
use super::traits::{Statement, StatementKind};
use crate::clause::{InsertInfos, InsertPayload, TableRef, sql_insert_infos, sql_table};
use crate::error::SqlerResult;

/// Options of an INSERT.
///
/// A structured `infos` payload takes precedence over the verbatim
/// `fields` / `values` pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertOptions {
    pub table: Option<TableRef>,
    pub infos: Option<InsertPayload>,
    /// Verbatim field list, without parentheses
    pub fields: Option<String>,
    /// Verbatim value list, without parentheses
    pub values: Option<String>,
}

impl InsertOptions {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn infos(mut self, infos: impl Into<InsertPayload>) -> Self {
        self.infos = Some(infos.into());
        self
    }

    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn values(mut self, values: impl Into<String>) -> Self {
        self.values = Some(values.into());
        self
    }
}

impl Statement for InsertOptions {
    fn to_sql(&self) -> SqlerResult<String> {
        insert(self)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }
}

fn parenthesize(s: Option<&str>) -> String {
    match s.map(str::trim) {
        Some(s) if !s.is_empty() => format!("({s})"),
        _ => String::new(),
    }
}

/// Compile an INSERT.
///
/// A payload that yields no values inserts one row of defaults
/// (`INSERT INTO t DEFAULT VALUES`).
pub fn insert(opts: &InsertOptions) -> SqlerResult<String> {
    let table = sql_table(opts.table.as_ref())?;
    let InsertInfos { fields, values } = match &opts.infos {
        Some(payload) => sql_insert_infos(payload),
        None => InsertInfos {
            fields: parenthesize(opts.fields.as_deref()),
            values: parenthesize(opts.values.as_deref()),
        },
    };

    if values.is_empty() {
        return Ok(assemble(["INSERT INTO", table.as_str(), "DEFAULT VALUES"]));
    }

    Ok(assemble([
        "INSERT INTO".to_string(),
        table,
        fields,
        "VALUES".to_string(),
        values,
    ]))
}
