//! Error type definitions
//!
//! Defines the main error types used throughout the configuration service.

use thiserror::Error;

/// Main error type for the configuration service
#[derive(Error, Debug)]
pub enum Error {
    /// Service settings errors (env/file/CLI)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// The backing file exists but could not be read or parsed
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Directory creation or file write failed
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Create a storage read error
    pub fn storage_read(msg: impl Into<String>) -> Self {
        Self::StorageRead(msg.into())
    }

    /// Create a storage write error
    pub fn storage_write(msg: impl Into<String>) -> Self {
        Self::StorageWrite(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
