//! Generic client trait for unified database access.

use crate::error::SqlerResult;
use std::future::Future;
use tokio_postgres::Row;

/// A trait that unifies database clients and transactions.
///
/// Statements are compiled to literal SQL, so nothing here takes bind
/// parameters. Pass a pool, a pooled client or a transaction anywhere a
/// `GenericClient` is expected.
pub trait GenericClient: Send + Sync {
    /// Execute a query and return all rows.
    fn query(&self, sql: &str) -> impl Future<Output = SqlerResult<Vec<Row>>> + Send;

    /// Execute a query and return the first row, if any.
    ///
    /// Semantics:
    /// - 0 rows: returns `Ok(None)`
    /// - 1 or more rows: returns `Ok(Some(first_row))`
    fn query_opt(&self, sql: &str) -> impl Future<Output = SqlerResult<Option<Row>>> + Send {
        async move {
            let rows = self.query(sql).await?;
            Ok(rows.into_iter().next())
        }
    }

    /// Execute a statement and return the number of affected rows.
    fn execute(&self, sql: &str) -> impl Future<Output = SqlerResult<u64>> + Send;
}

impl<C: GenericClient + ?Sized> GenericClient for &C {
    async fn query(&self, sql: &str) -> SqlerResult<Vec<Row>> {
        GenericClient::query(&**self, sql).await
    }

    async fn query_opt(&self, sql: &str) -> SqlerResult<Option<Row>> {
        GenericClient::query_opt(&**self, sql).await
    }

    async fn execute(&self, sql: &str) -> SqlerResult<u64> {
        GenericClient::execute(&**self, sql).await
    }
}

impl GenericClient for tokio_postgres::Client {
    async fn query(&self, sql: &str) -> SqlerResult<Vec<Row>> {
        Ok(tokio_postgres::Client::query(self, sql, &[]).await?)
    }

    async fn execute(&self, sql: &str) -> SqlerResult<u64> {
        Ok(tokio_postgres::Client::execute(self, sql, &[]).await?)
    }
}

impl GenericClient for tokio_postgres::Transaction<'_> {
    async fn query(&self, sql: &str) -> SqlerResult<Vec<Row>> {
        Ok(tokio_postgres::Transaction::query(self, sql, &[]).await?)
    }

    async fn execute(&self, sql: &str) -> SqlerResult<u64> {
        Ok(tokio_postgres::Transaction::execute(self, sql, &[]).await?)
    }
}

// ===== deadpool-postgres support =====

#[cfg(feature = "pool")]
impl GenericClient for deadpool_postgres::Client {
    async fn query(&self, sql: &str) -> SqlerResult<Vec<Row>> {
        // Delegate to the deref target (ClientWrapper / tokio_postgres::Client).
        GenericClient::query(&**self, sql).await
    }

    async fn execute(&self, sql: &str) -> SqlerResult<u64> {
        GenericClient::execute(&**self, sql).await
    }
}

#[cfg(feature = "pool")]
impl GenericClient for deadpool_postgres::ClientWrapper {
    async fn query(&self, sql: &str) -> SqlerResult<Vec<Row>> {
        GenericClient::query(&**self, sql).await
    }

    async fn execute(&self, sql: &str) -> SqlerResult<u64> {
        GenericClient::execute(&**self, sql).await
    }
}

#[cfg(feature = "pool")]
impl GenericClient for deadpool_postgres::Transaction<'_> {
    async fn query(&self, sql: &str) -> SqlerResult<Vec<Row>> {
        GenericClient::query(&**self, sql).await
    }

    async fn execute(&self, sql: &str) -> SqlerResult<u64> {
        GenericClient::execute(&**self, sql).await
    }
}
