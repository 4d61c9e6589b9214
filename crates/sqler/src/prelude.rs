//! Common imports.
//!
//! ```ignore
//! use sqler::prelude::*;
//! ```

pub use crate::builder::{
    DeleteOptions, InsertOptions, SelectOptions, Statement, UnionOptions, UpdateOptions,
    subquery,
};
pub use crate::clause::{FieldTarget, Fields, InsertPayload, Join, Limit, UpdatePayload};
pub use crate::client::GenericClient;
pub use crate::condition::{Cond, CondValue};
pub use crate::entries;
pub use crate::error::{SqlerError, SqlerResult};
pub use crate::exec::StatementExt;
pub use crate::processor::*;
pub use crate::value::{Raw, Value, raw};

#[cfg(feature = "pool")]
pub use crate::pool::{Pool, PoolConfig};

#[cfg(feature = "pool")]
pub use crate::transaction::Transaction;
