//! Error types for comment-purge

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for comment-purge
#[derive(Debug, Error)]
pub enum PurgeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Comment store file is missing
    #[error("Comment store not found: {0}")]
    StoreNotFound(PathBuf),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Failure reported by a comment store backend
    #[error("Comment store error: {0}")]
    Store(String),

    /// Deletion was requested for a scan that has not reached its end
    #[error("Scan has not finished (next offset {0})")]
    ScanIncomplete(usize),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<PurgeError>,
    },
}

impl PurgeError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        PurgeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for PurgeError {
    fn from(err: toml::de::Error) -> Self {
        PurgeError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for PurgeError {
    fn from(err: toml::ser::Error) -> Self {
        PurgeError::Toml(err.to_string())
    }
}

/// Result type alias for comment-purge
pub type Result<T> = std::result::Result<T, PurgeError>;
