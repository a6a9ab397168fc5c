//! Error types for store construction and fixture loading
//!
//! Messages name the record or file only; the cause is reachable through
//! [`std::error::Error::source`].

use crate::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while building a store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Record at `index` failed validation
    #[error("record {index} is invalid")]
    InvalidRecord {
        /// Position in the input sequence
        index: usize,
        /// The schema violation
        #[source]
        source: ValidationError,
    },

    /// Fixture file failed validation
    #[error("fixture {} is invalid", .path.display())]
    InvalidFixture {
        /// Offending file
        path: PathBuf,
        /// The schema violation
        #[source]
        source: ValidationError,
    },

    /// Two projects share a slug
    #[error("duplicate project slug: {slug}")]
    DuplicateSlug {
        /// The repeated slug
        slug: String,
    },

    /// Two transcripts belong to the same project
    #[error("duplicate transcript for project: {slug}")]
    DuplicateTranscript {
        /// Project slug claimed twice
        slug: String,
    },

    /// Fixture file stem differs from the record's slug
    #[error("fixture {} holds record `{slug}`; file name must match", .path.display())]
    FileNameMismatch {
        /// Offending file
        path: PathBuf,
        /// Slug found inside the file
        slug: String,
    },

    /// Filesystem failure
    #[error("failed to read {}", .path.display())]
    Io {
        /// File or directory being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Fixture is not well-formed JSON
    #[error("failed to parse {}", .path.display())]
    Json {
        /// Offending file
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Validation failure behind this error, if any
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidRecord { source, .. } | Self::InvalidFixture { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
