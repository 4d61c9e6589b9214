//! Per-clause compilers.
//!
//! Each compiler takes one clause input and returns the clause text, or an
//! empty string when the input yields no clause. Only the table reference can
//! fail.

pub mod fields;
pub mod limit;
pub mod order;
pub mod payload;
pub mod table;

pub use fields::{FieldTarget, Fields, sql_select_fields};
pub use limit::{Limit, Top, sql_distinct, sql_limit, sql_top};
pub use order::{GroupBy, OrderBy, sql_group_by, sql_group_by_having, sql_order_by};
pub use payload::{
    InsertInfos, InsertPayload, Row, UpdatePayload, sql_insert_infos, sql_update_infos,
};
pub use table::{Join, JoinKind, TableRef, sql_join, sql_table};
