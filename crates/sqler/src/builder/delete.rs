use super::assemble;
use super::traits::{Statement, StatementKind};
use crate::clause::{Limit, OrderBy, TableRef, sql_limit, sql_order_by, sql_table};
use crate::condition::{Cond, sql_where};
use crate::error::SqlerResult;

/// Options of a DELETE.
///
/// An unset `wheres` deletes every row of the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteOptions {
    pub table: Option<TableRef>,
    pub wheres: Option<Cond>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
}

impl DeleteOptions {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn wheres(mut self, wheres: impl Into<Cond>) -> Self {
        self.wheres = Some(wheres.into());
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<Limit>) -> Self {
        self.limit = Some(limit.into());
        self
    }
}

impl Statement for DeleteOptions {
    fn to_sql(&self) -> SqlerResult<String> {
        delete(self)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }
}

/// Compile a DELETE.
pub fn delete(opts: &DeleteOptions) -> SqlerResult<String> {
    let table = sql_table(opts.table.as_ref())?;

    Ok(assemble([
        "DELETE FROM".to_string(),
        table,
        sql_where(opts.wheres.as_ref()),
        sql_order_by(opts.order_by.as_ref()),
        sql_limit(opts.limit.as_ref()),
    ]))
}
