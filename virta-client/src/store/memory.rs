//! In-process key-value store.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

use super::error::StoreError;
use super::KeyValueStore;

/// Volatile store backed by a `HashMap`.
///
/// Useful for tests and for running without a writable disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the store has no keys.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        // Batches land in a single `extend`, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn get_all(&self, keys: &[&str]) -> Result<Vec<Option<Value>>, StoreError> {
        let entries = self.lock();
        Ok(keys.iter().map(|key| entries.get(*key).cloned()).collect())
    }

    fn set_all(&self, entries: Vec<(String, Value)>) -> Result<(), StoreError> {
        self.lock().extend(entries);
        Ok(())
    }
}
