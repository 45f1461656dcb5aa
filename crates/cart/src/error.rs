//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the file-backed storage area.
///
/// These never reach callers of [`CartStore`](crate::CartStore); the store
/// logs them and falls back to its empty-cart or no-op defaults.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the storage file failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage file exists but is not a JSON object of string values.
    #[error("storage file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the storage contents failed.
    #[error("storage serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
