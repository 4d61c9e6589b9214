use super::assemble;
use super::traits::{Statement, StatementKind};
use crate::clause::{
    Fields, GroupBy, Join, Limit, OrderBy, TableRef, Top, sql_distinct, sql_group_by_having,
    sql_join, sql_limit, sql_order_by, sql_select_fields, sql_table, sql_top,
};
use crate::condition::{Cond, sql_where};
use crate::error::SqlerResult;
use crate::value::Raw;

/// Options of a SELECT.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectOptions {
    /// Main table. Required.
    pub table: Option<TableRef>,
    /// JOIN chain
    pub joins: Vec<Join>,
    pub distinct: bool,
    pub top: Option<Top>,
    /// Projection, `*` when unset
    pub fields: Option<Fields>,
    pub wheres: Option<Cond>,
    pub group_by: Option<GroupBy>,
    /// Rendered only together with `group_by`
    pub havings: Option<Cond>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<Limit>,
}

impl SelectOptions {
    /// Create options selecting from `table`.
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: Some(table.into()),
            ..Self::default()
        }
    }

    /// Append one join to the chain.
    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    /// Replace the join chain.
    pub fn joins(mut self, joins: Vec<Join>) -> Self {
        self.joins = joins;
        self
    }

    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    pub fn top(mut self, top: impl Into<Top>) -> Self {
        self.top = Some(top.into());
        self
    }

    pub fn fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn wheres(mut self, wheres: impl Into<Cond>) -> Self {
        self.wheres = Some(wheres.into());
        self
    }

    pub fn group_by(mut self, group_by: impl Into<GroupBy>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    pub fn havings(mut self, havings: impl Into<Cond>) -> Self {
        self.havings = Some(havings.into());
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

impl Statement for SelectOptions {
    fn to_sql(&self) -> SqlerResult<String> {
        select(self)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }
}

/// Compile a SELECT.
pub fn select(opts: &SelectOptions) -> SqlerResult<String> {
    let table = sql_table(opts.table.as_ref())?;
    let joins = sql_join(opts.table.as_ref(), &opts.joins)?;

    Ok(assemble([
        "SELECT".to_string(),
        sql_distinct(opts.distinct),
        sql_top(opts.top.as_ref()),
        sql_select_fields(opts.fields.as_ref()),
        "FROM".to_string(),
        table,
        joins,
        sql_where(opts.wheres.as_ref()),
        sql_group_by_having(opts.group_by.as_ref(), opts.havings.as_ref()),
        sql_order_by(opts.order_by.as_ref()),
        sql_limit(opts.limit.as_ref()),
    ]))
}

/// Compile a SELECT as a parenthesized raw fragment for use inside another
/// statement, e.g. with [`where_exists`](crate::where_exists).
pub fn subquery(opts: &SelectOptions) -> SqlerResult<Raw> {
    Ok(Raw::new(format!("({})", select(opts)?)))
}

/// Options of a UNION / UNION ALL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnionOptions {
    pub selects: Vec<SelectOptions>,
    /// Applied once to the whole union.
    pub order_by: Option<OrderBy>,
    /// Keep duplicates (`UNION ALL`). Only read through [`Statement::to_sql`].
    pub all: bool,
}

impl UnionOptions {
    pub fn new(selects: Vec<SelectOptions>) -> Self {
        Self {
            selects,
            ..Self::default()
        }
    }

    pub fn select(mut self, select: SelectOptions) -> Self {
        self.selects.push(select);
        self
    }

    pub fn order_by(mut self, order_by: impl Into<OrderBy>) -> Self {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }
}

impl Statement for UnionOptions {
    fn to_sql(&self) -> SqlerResult<String> {
        if self.all { union_all(self) } else { union(self) }
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Union
    }
}

fn compile_union(opts: &UnionOptions, separator: &str) -> SqlerResult<String> {
    let selects = opts
        .selects
        .iter()
        .map(select)
        .collect::<SqlerResult<Vec<_>>>()?;

    Ok(assemble([
        selects
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(separator),
        sql_order_by(opts.order_by.as_ref()),
    ]))
}

/// Compile `<select> UNION <select> ... [ORDER BY ...]`.
pub fn union(opts: &UnionOptions) -> SqlerResult<String> {
    compile_union(opts, " UNION ")
}

/// Compile `<select> UNION ALL <select> ... [ORDER BY ...]`.
pub fn union_all(opts: &UnionOptions) -> SqlerResult<String> {
    compile_union(opts, " UNION ALL ")
}
