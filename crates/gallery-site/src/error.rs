//! Error types for the site layer

use gallery_contracts::UnknownWing;
use gallery_store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Page-load failure, rendered as an HTTP error page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// Requested resource does not exist
    #[error("{message}")]
    NotFound {
        /// User-facing explanation
        message: String,
    },
}

impl PageError {
    /// Build a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// HTTP status code
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
        }
    }

    /// User-facing message
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message } => message,
        }
    }
}

impl From<UnknownWing> for PageError {
    fn from(err: UnknownWing) -> Self {
        Self::not_found(format!("Wing \"{}\" not found", err.value()))
    }
}

/// Startup failure
#[derive(Debug, Error)]
pub enum SiteError {
    /// Configuration file unreadable
    #[error("failed to read config {}", .path.display())]
    ConfigRead {
        /// Configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid TOML or has bad values
    #[error("invalid config{}", .path.as_ref().map(|p| format!(" {}", p.display())).unwrap_or_default())]
    ConfigParse {
        /// Source file, absent for inline text
        path: Option<PathBuf>,
        /// TOML parser error
        #[source]
        source: toml::de::Error,
    },

    /// Fixture data failed to load
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Logging could not be initialised
    #[error("failed to initialise tracing: {0}")]
    Telemetry(String),
}

/// Result type for site operations
pub type Result<T> = std::result::Result<T, SiteError>;
