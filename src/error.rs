//! Unified crate error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum DexVisionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid timeframe: {0}")]
    InvalidTimeframe(String),
}

/// Key-value storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O failed for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}
