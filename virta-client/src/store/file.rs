//! Disk-backed key-value store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde_json::Value;

use super::error::StoreError;
use super::KeyValueStore;

/// Default file name for the store.
const DEFAULT_FILE_NAME: &str = "virta_session.json";

/// Configuration for the file store.
#[derive(Debug, Clone)]
pub struct FileStoreConfig {
    /// Path to the JSON file holding all keys.
    pub path: PathBuf,
}

impl FileStoreConfig {
    /// Create a new config with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        // Default to a file in the current directory
        Self::new(DEFAULT_FILE_NAME)
    }
}

/// Key-value store persisted as a single JSON object on disk.
///
/// Every write is a read-modify-write of the whole file, serialized by an
/// internal lock and finished with an atomic rename. A batch passed to
/// [`KeyValueStore::set_all`] therefore lands completely or not at all,
/// and concurrent writers resolve as last-writer-wins.
///
/// Values are stored in plain text. All file access is blocking `std::fs`
/// I/O on the calling thread; the file holds a handful of keys, so async
/// callers use it directly.
#[derive(Debug)]
pub struct FileStore {
    config: FileStoreConfig,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a new file store with the given config.
    ///
    /// The file is created lazily on the first write.
    pub fn new(config: FileStoreConfig) -> Self {
        Self {
            config,
            write_lock: Mutex::new(()),
        }
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.config.path.clone(),
            source,
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        let contents = match std::fs::read_to_string(&self.config.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    fn write_all(&self, entries: &BTreeMap<String, Value>) -> Result<(), StoreError> {
        // Create parent directories if needed
        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(entries)?;

        let mut tmp = self.config.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.config.path).map_err(|e| self.io_error(e))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let mut entries = self.read_all()?;
        Ok(entries.remove(key))
    }

    fn get_all(&self, keys: &[&str]) -> Result<Vec<Option<Value>>, StoreError> {
        let mut entries = self.read_all()?;
        Ok(keys.iter().map(|key| entries.remove(*key)).collect())
    }

    fn set_all(&self, batch: Vec<(String, Value)>) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let mut entries = self.read_all()?;
        entries.extend(batch);
        self.write_all(&entries)
    }
}
