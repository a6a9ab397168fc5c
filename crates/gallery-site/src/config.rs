//! Site configuration
//!
//! Read from a TOML file; every key is optional.
//!
//! ```toml
//! data_dir = "data"
//! pitch_soft_limit = 200
//!
//! [log]
//! filter = "gallery=debug,info"
//! format = "json"
//! ```

use crate::error::{Result, SiteError};
use gallery_store::SchemaValidator;
use gallery_store::validation::DEFAULT_PITCH_SOFT_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Gallery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root of the fixture tree
    pub data_dir: PathBuf,
    /// Project fixtures, relative to `data_dir`
    pub projects_dir: PathBuf,
    /// Transcript fixtures, relative to `data_dir`
    pub transcripts_dir: PathBuf,
    /// Pitch length above which a warning is logged
    pub pitch_soft_limit: usize,
    /// Logging settings
    pub log: LogConfig,
}

impl SiteConfig {
    /// Create configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns [`SiteError::ConfigParse`] on malformed TOML or unknown
    /// value types.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|source| SiteError::ConfigParse {
            path: None,
            source,
        })
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Returns [`SiteError::ConfigRead`] if the file cannot be read, or
    /// [`SiteError::ConfigParse`] if it is not valid configuration.
    pub async fn load(path: &Path) -> Result<Self> {
        let text =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SiteError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        toml::from_str(&text).map_err(|source| SiteError::ConfigParse {
            path: Some(path.to_path_buf()),
            source,
        })
    }

    /// Set data directory
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set pitch warning threshold
    #[must_use]
    pub fn with_pitch_soft_limit(mut self, limit: usize) -> Self {
        self.pitch_soft_limit = limit;
        self
    }

    /// Set log settings
    #[must_use]
    pub fn with_log(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    /// Directory holding project fixtures
    #[must_use]
    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join(&self.projects_dir)
    }

    /// Directory holding transcript fixtures
    #[must_use]
    pub fn transcripts_path(&self) -> PathBuf {
        self.data_dir.join(&self.transcripts_dir)
    }

    /// Validator configured from these settings
    #[must_use]
    pub fn validator(&self) -> SchemaValidator {
        SchemaValidator::new().with_pitch_soft_limit(self.pitch_soft_limit)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            projects_dir: PathBuf::from("projects"),
            transcripts_dir: PathBuf::from("transcripts"),
            pitch_soft_limit: DEFAULT_PITCH_SOFT_LIMIT,
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}
