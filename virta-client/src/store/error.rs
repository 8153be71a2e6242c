//! Key-value store error types.

use std::path::PathBuf;

/// Errors that can occur when reading or writing the key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Store contents could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored value has an unexpected shape
    #[error("corrupt value for key {key:?}: {message}")]
    Corrupt { key: String, message: String },
}
