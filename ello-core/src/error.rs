//! Error types for Ello Core

use thiserror::Error;

/// Result type alias using ElloError
pub type Result<T> = std::result::Result<T, ElloError>;

/// Top-level error type for all Ello operations
#[derive(Debug, Error)]
pub enum ElloError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that occur while fetching the catalog.
///
/// The load state machine collapses every variant into a single failed state;
/// the variants only exist so logs can say what went wrong.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Server reported: {0}")]
    Server(String),

    #[error("Catalog file unreadable: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Malformed(err.to_string())
    }
}

/// Errors that occur while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}
