//! Compile-and-run helpers for any [`GenericClient`].
//!
//! ```ignore
//! use sqler::{SelectOptions, StatementExt};
//!
//! let rows = pool.select(&SelectOptions::new("users").limit(10)).await?;
//! let count: i64 = pool
//!     .select_value(&SelectOptions::new("users").fields("COUNT(*)"))
//!     .await?;
//! ```
//!
//! PostgreSQL reports only an affected-row count for INSERT / UPDATE /
//! DELETE. Use `RETURNING` with [`GenericClient::query`] to read generated ids.

use crate::builder::{
    self, DeleteOptions, InsertOptions, SelectOptions, Statement, StatementKind, UnionOptions,
    UpdateOptions,
};
use crate::client::GenericClient;
use crate::error::{SqlerError, SqlerResult};
use std::future::Future;
use tokio_postgres::Row;
use tokio_postgres::types::FromSqlOwned;

fn log_statement(kind: StatementKind, sql: &str) {
    #[cfg(feature = "tracing")]
    tracing::debug!(target: "sqler.sql", kind = %kind, sql = %sql, "executing statement");
    #[cfg(not(feature = "tracing"))]
    let _ = (kind, sql);
}

async fn fetch<C: GenericClient + ?Sized>(
    conn: &C,
    kind: StatementKind,
    sql: SqlerResult<String>,
) -> SqlerResult<Vec<Row>> {
    let sql = sql?;
    log_statement(kind, &sql);
    conn.query(&sql).await
}

async fn affect<C: GenericClient + ?Sized>(
    conn: &C,
    kind: StatementKind,
    sql: SqlerResult<String>,
) -> SqlerResult<u64> {
    let sql = sql?;
    log_statement(kind, &sql);
    conn.execute(&sql).await
}

/// Statement execution on top of [`GenericClient`].
///
/// Implemented for every `GenericClient`, including pools and transactions.
pub trait StatementExt: GenericClient {
    /// Run a SELECT and return all rows.
    fn select(&self, opts: &SelectOptions) -> impl Future<Output = SqlerResult<Vec<Row>>> + Send {
        fetch(self, StatementKind::Select, builder::select(opts))
    }

    /// Run a SELECT and return the first row, if any.
    fn select_row(
        &self,
        opts: &SelectOptions,
    ) -> impl Future<Output = SqlerResult<Option<Row>>> + Send {
        async move {
            let rows = fetch(self, StatementKind::Select, builder::select(opts)).await?;
            Ok(rows.into_iter().next())
        }
    }

    /// Run a SELECT and return the first column of the first row.
    ///
    /// Returns [`SqlerError::NotFound`] when the query yields no rows.
    fn select_value<T>(&self, opts: &SelectOptions) -> impl Future<Output = SqlerResult<T>> + Send
    where
        T: FromSqlOwned + Send,
    {
        async move {
            let row = self
                .select_row(opts)
                .await?
                .ok_or_else(|| SqlerError::not_found("Expected one row, got none"))?;
            let value: T = row.try_get(0)?;
            Ok(value)
        }
    }

    /// Run an INSERT and return the number of inserted rows.
    fn insert(&self, opts: &InsertOptions) -> impl Future<Output = SqlerResult<u64>> + Send {
        affect(self, StatementKind::Insert, builder::insert(opts))
    }

    /// Run an UPDATE and return the number of affected rows.
    fn update(&self, opts: &UpdateOptions) -> impl Future<Output = SqlerResult<u64>> + Send {
        affect(self, StatementKind::Update, builder::update(opts))
    }

    /// Run a DELETE and return the number of deleted rows.
    fn delete(&self, opts: &DeleteOptions) -> impl Future<Output = SqlerResult<u64>> + Send {
        affect(self, StatementKind::Delete, builder::delete(opts))
    }

    /// Run a UNION and return all rows.
    fn union(&self, opts: &UnionOptions) -> impl Future<Output = SqlerResult<Vec<Row>>> + Send {
        fetch(self, StatementKind::Union, builder::union(opts))
    }

    /// Run a UNION ALL and return all rows.
    fn union_all(
        &self,
        opts: &UnionOptions,
    ) -> impl Future<Output = SqlerResult<Vec<Row>>> + Send {
        fetch(self, StatementKind::Union, builder::union_all(opts))
    }

    /// Run any statement that returns rows.
    fn fetch_statement<S: Statement>(
        &self,
        stmt: &S,
    ) -> impl Future<Output = SqlerResult<Vec<Row>>> + Send {
        fetch(self, stmt.kind(), stmt.to_sql())
    }

    /// Run any statement and return the affected row count.
    fn execute_statement<S: Statement>(
        &self,
        stmt: &S,
    ) -> impl Future<Output = SqlerResult<u64>> + Send {
        affect(self, stmt.kind(), stmt.to_sql())
    }
}

impl<C: GenericClient + ?Sized> StatementExt for C {}
