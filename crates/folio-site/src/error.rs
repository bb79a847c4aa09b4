//! Errors raised while assembling a site configuration.

use std::path::PathBuf;

/// Errors that can occur while building the site configuration.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Missing or invalid project configuration.
    #[error("{0}")]
    Config(String),

    /// A file or folder the configuration refers to does not exist.
    #[error("Could not find {what} \"{}\". {hint}", .path.display())]
    NotFound {
        what: &'static str,
        path: PathBuf,
        hint: String,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for site operations.
pub type Result<T> = std::result::Result<T, SiteError>;

impl SiteError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        SiteError::Config(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(what: &'static str, path: impl Into<PathBuf>, hint: impl Into<String>) -> Self {
        SiteError::NotFound {
            what,
            path: path.into(),
            hint: hint.into(),
        }
    }

    /// Create a parse error
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        SiteError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether this error reports a missing file or folder.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SiteError::NotFound { .. })
    }
}
