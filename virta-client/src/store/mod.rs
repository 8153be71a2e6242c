//! Persistent key-value storage.
//!
//! A flat string-keyed store of JSON values. The login flow writes the
//! session token and logged-in flag here; the rest of the application
//! reads them back at startup.

mod error;
mod file;
mod memory;
mod session;

use serde_json::Value;

pub use error::StoreError;
pub use file::{FileStore, FileStoreConfig};
pub use memory::MemoryStore;
pub use session::{LOGGED_IN_KEY, SessionRecord, TOKEN_KEY};

/// A string-keyed store of JSON values.
///
/// Implementations must apply a [`set_all`](KeyValueStore::set_all) batch as
/// one unit and serialize concurrent batches. A [`get_all`](KeyValueStore::get_all)
/// read sees either all or none of any batch; separate `get` calls may
/// straddle a write.
pub trait KeyValueStore: Send + Sync {
    /// Read a value, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Read several keys from one snapshot, in the order given.
    fn get_all(&self, keys: &[&str]) -> Result<Vec<Option<Value>>, StoreError>;

    /// Write several keys as one batch.
    fn set_all(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError>;

    /// Write a single key.
    fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.set_all(vec![(key.to_string(), value)])
    }
}
