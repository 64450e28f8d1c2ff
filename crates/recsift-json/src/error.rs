//! Error types for recsift-json operations.

use std::io;
use thiserror::Error;

/// The error type for recsift-json operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for recsift-json operations.
pub type Result<T> = std::result::Result<T, Error>;
