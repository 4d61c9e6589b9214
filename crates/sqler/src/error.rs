//! Error types for sqler

use thiserror::Error;

/// Result type alias for sqler operations
pub type SqlerResult<T> = Result<T, SqlerError>;

/// Error types for statement compilation and execution
#[derive(Debug, Error)]
pub enum SqlerError {
    /// Table reference is missing or unusable
    #[error("invalid table name")]
    InvalidTableName,

    /// Aliased table reference without a name/alias entry
    #[error("no table entry in aliased table reference")]
    NoTableEntry,

    /// No driver for the requested database engine
    #[error("unsupported database engine: {0}")]
    UnsupportedEngine(String),

    /// Statement issued after the pool was ended
    #[error("pool is closed")]
    PoolClosed,

    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query execution error
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Row or value not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl SqlerError {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Check if this is a pool closed error
    pub fn is_pool_closed(&self) -> bool {
        matches!(self, Self::PoolClosed)
    }

    /// Check if this error comes from a bad table reference
    pub fn is_table_error(&self) -> bool {
        matches!(self, Self::InvalidTableName | Self::NoTableEntry)
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for SqlerError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        match err {
            deadpool_postgres::PoolError::Closed => Self::PoolClosed,
            deadpool_postgres::PoolError::Backend(e) => Self::Query(e),
            other => Self::Pool(other.to_string()),
        }
    }
}
