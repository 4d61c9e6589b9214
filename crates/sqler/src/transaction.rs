//! Owned transactions on a pooled connection.
//!
//! [`Pool::begin`](crate::Pool::begin) checks out a connection and issues
//! `BEGIN`. The returned [`Transaction`] owns that connection until
//! [`Transaction::commit`] or [`Transaction::rollback`] hands it back to the
//! pool. It implements [`GenericClient`], so every
//! [`StatementExt`](crate::StatementExt) method runs inside it.
//!
//! For ergonomic commit/rollback handling, use the [`transaction!`] macro.
//!
//! # Example
//!
//! ```ignore
//! use sqler::{Cond, StatementExt, UpdateOptions, UpdatePayload, entries, raw};
//!
//! # async fn demo(pool: &sqler::Pool) -> sqler::SqlerResult<()> {
//! sqler::transaction!(pool, trx, {
//!     trx.update(
//!         &UpdateOptions::new("accounts")
//!             .infos(UpdatePayload::Map(entries! { "balance" => raw("balance - 100") }))
//!             .wheres(Cond::Map(entries! { "id" => 1 })),
//!     )
//!     .await?;
//!     Ok(())
//! })?;
//! # Ok(()) }
//! ```

use crate::client::GenericClient;
use crate::error::{SqlerError, SqlerResult};
use tokio_postgres::Row;

/// Runs the given block inside a transaction begun on `$pool`.
///
/// - Begins a transaction via `$pool.begin().await`.
/// - Commits on `Ok(_)`.
/// - Rolls back on `Err(_)`.
///
/// The block must evaluate to `sqler::SqlerResult<T>`.
#[macro_export]
macro_rules! transaction {
    ($pool:expr, $trx:ident, $body:block) => {{
        let $trx = ($pool).begin().await?;

        let __sqler_trx_body_result = async { $body }.await;
        match __sqler_trx_body_result {
            Ok(value) => {
                $trx.commit().await?;
                Ok(value)
            }
            Err(error) => match $trx.rollback().await {
                Ok(()) => Err(error),
                Err(rollback_err) => Err($crate::SqlerError::Other(format!(
                    "{error} (rollback failed: {rollback_err})"
                ))),
            },
        }
    }};
}

/// A transaction that owns one pooled connection.
///
/// Dropping it without `commit` or `rollback` detaches the connection from
/// the pool and closes it, which makes the server roll the transaction back.
#[must_use = "a transaction must be committed or rolled back"]
pub struct Transaction {
    conn: Option<deadpool_postgres::Client>,
}

impl std::fmt::Debug for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transaction")
            .field("finished", &self.conn.is_none())
            .finish()
    }
}

impl Transaction {
    pub(crate) async fn begin(conn: deadpool_postgres::Client) -> SqlerResult<Self> {
        conn.batch_execute("BEGIN").await?;
        Ok(Self { conn: Some(conn) })
    }

    fn conn(&self) -> SqlerResult<&deadpool_postgres::Client> {
        self.conn
            .as_ref()
            .ok_or_else(|| SqlerError::Other("transaction already finished".to_string()))
    }

    /// Commit and release the connection back to the pool.
    pub async fn commit(mut self) -> SqlerResult<()> {
        self.finish("COMMIT").await
    }

    /// Roll back and release the connection back to the pool.
    pub async fn rollback(mut self) -> SqlerResult<()> {
        self.finish("ROLLBACK").await
    }

    async fn finish(&mut self, sql: &str) -> SqlerResult<()> {
        let conn = self
            .conn
            .take()
            .ok_or_else(|| SqlerError::Other("transaction already finished".to_string()))?;

        match conn.batch_execute(sql).await {
            Ok(()) => Ok(()),
            Err(e) => {
                // The session state is unknown; keep it out of the pool.
                drop(deadpool_postgres::Object::take(conn));
                Err(e.into())
            }
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Transaction dropped without explicit commit or rollback");

            drop(deadpool_postgres::Object::take(conn));
        }
    }
}

impl GenericClient for Transaction {
    async fn query(&self, sql: &str) -> SqlerResult<Vec<Row>> {
        GenericClient::query(self.conn()?, sql).await
    }

    async fn execute(&self, sql: &str) -> SqlerResult<u64> {
        GenericClient::execute(self.conn()?, sql).await
    }
}
