//! Error types for Shelf Core

use thiserror::Error;

/// Errors that occur while talking to the remote book API
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Book not found")]
    NotFound,

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Map a non-success HTTP status to an error
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            Self::NotFound
        } else {
            Self::Status(status)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Errors that occur in durable client-side storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Invalid configuration values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),
}
