//! Process-wide pools shared by name.
//!
//! A pool is created by the first [`init_shared_pool`] call for its name and
//! stays registered until [`remove_shared_pool`]. An ended pool is replaced
//! by the next `init_shared_pool` for the same name.

use super::{Pool, PoolConfig};
use crate::error::SqlerResult;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

fn shared_pools() -> MutexGuard<'static, HashMap<String, Pool>> {
    static POOLS: OnceLock<Mutex<HashMap<String, Pool>>> = OnceLock::new();
    POOLS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Get the pool registered under `name`, creating it from `config` first if
/// there is none.
pub fn init_shared_pool(name: &str, config: &PoolConfig) -> SqlerResult<Pool> {
    let mut pools = shared_pools();
    if let Some(pool) = pools.get(name).filter(|pool| !pool.is_closed()) {
        return Ok(pool.clone());
    }

    let pool = Pool::new(config)?;
    pools.insert(name.to_string(), pool.clone());
    Ok(pool)
}

/// Look up the pool registered under `name`.
pub fn get_shared_pool(name: &str) -> Option<Pool> {
    shared_pools().get(name).cloned()
}

/// Unregister the pool under `name`. The pool itself stays usable through
/// existing handles.
pub fn remove_shared_pool(name: &str) -> Option<Pool> {
    shared_pools().remove(name)
}
