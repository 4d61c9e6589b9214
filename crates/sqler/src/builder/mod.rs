//! Statement assembler.
//!
//! Each statement is described by an options record and compiled by a free
//! function (`select`, `insert`, ...). The clause compilers run in fixed SQL
//! order; empty clauses are dropped and the rest joined with single spaces.
//!
//! The only compile-time failure is a missing or unusable table reference.
//! Any other malformed clause input compiles to an empty clause.
//!
//! ```ignore
//! use sqler::{Cond, SelectOptions, entries, select, where_};
//!
//! let sql = select(
//!     &SelectOptions::new("users")
//!         .fields("id, name")
//!         .wheres(Cond::Map(entries! { "status" => "active", "age" => where_(">", 18) }))
//!         .order_by(vec![("created_at", "desc")])
//!         .limit(10),
//! )?;
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM users WHERE status = 'active' AND age > 18 ORDER BY created_at DESC LIMIT 10"
//! );
//! ```

pub mod delete;
pub mod insert;
pub mod select;
pub mod traits;
pub mod update;

pub use delete::{DeleteOptions, delete};
pub use insert::{InsertOptions, insert};
pub use select::{SelectOptions, UnionOptions, select, subquery, union, union_all};
pub use traits::{Statement, StatementKind};
pub use update::{UpdateOptions, update};

/// Join non-empty segments with a single space.
pub(crate) fn assemble<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sql = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if !sql.is_empty() {
            sql.push(' ');
        }
        sql.push_str(segment);
    }
    sql
}
