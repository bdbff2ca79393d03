//! Shared error types for the calculator and report exporter

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for email-roi operations
#[derive(Debug, Error)]
pub enum RoiError {
    /// Export was requested before any calculation produced results
    #[error("Nothing to export: no calculation results are available yet")]
    NoResultsAvailable,

    /// File system related errors
    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Document assembly errors
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RoiError {
    /// Create an I/O error with path context
    pub fn io_with_path(
        message: impl Into<String>,
        path: impl AsRef<Path>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            source: Some(source),
        }
    }

    /// Create an I/O error without a backing file
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source: None,
        }
    }

    /// Path associated with the error, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RoiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<lopdf::Error> for RoiError {
    fn from(err: lopdf::Error) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result type alias for email-roi operations
pub type Result<T> = std::result::Result<T, RoiError>;
