//! Station list error types.

use std::path::PathBuf;

/// Errors that can occur when loading or presenting stations.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Reading the station file failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse station JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Row lookup past the end of the list
    #[error("row {index} out of bounds (count {count})")]
    RowOutOfBounds { index: usize, count: usize },
}
