//! Storage error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the key-value backends.
///
/// Only writes surface these to callers. Read failures are absorbed by
/// [`crate::Storage::load`] and replaced with an empty collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem access failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A collection could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key is not usable as a storage key.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}
