//! Error types for album-core

use thiserror::Error;

/// Result type alias using album-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in album-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Listing request failed (network error or non-success status)
    #[error("Listing failed: {0}")]
    ListFailure(String),

    /// Upload request failed (network error or non-success status)
    #[error("Upload failed: {0}")]
    UploadFailure(String),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
