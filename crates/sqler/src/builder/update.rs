use super::assemble;
use super::traits::{Statement, StatementKind};
use crate::clause::{
    Limit, OrderBy, TableRef, UpdatePayload, sql_limit, sql_order_by, sql_table, sql_update_infos,
};
use crate::condition::{Cond, sql_where};
use crate::error::SqlerResult;

/// Options of an UPDATE.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOptions {
    pub table: Option<TableRef>,
    /// SET body
    pub infos: Option<UpdatePayload>,
    pub wheres: Option<Cond>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
}

impl UpdateOptions {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    pub fn infos(mut self, infos: impl Into<UpdatePayload>) -> Self {
        self.infos = Some(infos.into());
        self
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

impl Statement for UpdateOptions {
    fn to_sql(&self) -> SqlerResult<String> {
        update(self)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }
}

/// Compile an UPDATE.
pub fn update(opts: &UpdateOptions) -> SqlerResult<String> {
    let table = sql_table(opts.table.as_ref())?;

    Ok(assemble([
        "UPDATE".to_string(),
        table,
        "SET".to_string(),
        opts.infos.as_ref().map(sql_update_infos).unwrap_or_default(),
        sql_where(opts.wheres.as_ref()),
        sql_order_by(opts.order_by.as_ref()),
        sql_limit(opts.limit.as_ref()),
    ]))
}
