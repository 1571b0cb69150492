//! Key-value storage boundary.
//!
//! The ledger is persisted under three string keys, each holding JSON
//! (or a plain date key). Any backend able to `get`/`set`/`remove`
//! strings can hold it.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_TODAY_PUNCHES: &str = "today_punches";
pub const KEY_TODAY_DATE: &str = "today_date_key";
pub const KEY_HISTORY: &str = "history";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Reads and decodes a JSON value.
///
/// Missing and corrupt values are both reported as `None`: corrupt data is
/// treated as absent, never as a fault.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;

    match serde_json::from_str(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!(key, error = %e, "ignoring corrupt persisted value");
            None
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
