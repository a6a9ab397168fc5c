//! Fixture loading from a data directory
//!
//! Each record lives in its own `<slug>.json` file. Files are read in
//! file-name order, which becomes the store's load order.

use crate::error::{Result, StoreError};
use crate::project_store::ProjectStore;
use crate::transcript_store::TranscriptStore;
use crate::validation::SchemaValidator;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A parsed but not yet validated fixture file
#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    /// Source file
    pub path: PathBuf,
    /// Parsed JSON document
    pub value: Value,
}

impl Fixture {
    /// File name without the `.json` extension
    #[must_use]
    pub fn stem(&self) -> Option<&str> {
        self.path.file_stem().and_then(|s| s.to_str())
    }

    fn check_stem(&self, slug: &str) -> Result<()> {
        if self.stem() == Some(slug) {
            Ok(())
        } else {
            Err(StoreError::FileNameMismatch {
                path: self.path.clone(),
                slug: slug.to_string(),
            })
        }
    }
}

/// Read every `*.json` file in `dir`, sorted by file name
///
/// # Errors
/// Returns [`StoreError::Io`] if the directory or a file cannot be read and
/// [`StoreError::Json`] if a file is not valid JSON.
pub async fn read_dir(dir: &Path) -> Result<Vec<Fixture>> {
    let io_err = |source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_err)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut fixtures = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(&path).await.map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
            path: path.clone(),
            source,
        })?;
        fixtures.push(Fixture { path, value });
    }

    tracing::debug!("Read {} fixtures from {}", fixtures.len(), dir.display());
    Ok(fixtures)
}

/// Validate project fixtures and build the store
///
/// # Errors
/// Fails on the first invalid fixture, a file name that differs from the
/// slug, or a duplicate slug.
pub fn projects_from_fixtures(
    fixtures: &[Fixture],
    validator: &SchemaValidator,
) -> Result<ProjectStore> {
    let projects = fixtures
        .iter()
        .map(|fixture| {
            let project =
                validator
                    .validate_project(&fixture.value)
                    .map_err(|source| StoreError::InvalidFixture {
                        path: fixture.path.clone(),
                        source,
                    })?;
            fixture.check_stem(&project.slug)?;
            Ok(project)
        })
        .collect::<Result<Vec<_>>>()?;
    ProjectStore::new(projects)
}

/// Validate transcript fixtures and build the store
///
/// # Errors
/// Fails on the first invalid fixture, a file name that differs from the
/// project slug, or two transcripts for one project.
pub fn transcripts_from_fixtures(
    fixtures: &[Fixture],
    validator: &SchemaValidator,
) -> Result<TranscriptStore> {
    let transcripts = fixtures
        .iter()
        .map(|fixture| {
            let transcript = validator
                .validate_transcript(&fixture.value)
                .map_err(|source| StoreError::InvalidFixture {
                    path: fixture.path.clone(),
                    source,
                })?;
            fixture.check_stem(&transcript.project_slug)?;
            Ok(transcript)
        })
        .collect::<Result<Vec<_>>>()?;
    TranscriptStore::new(transcripts)
}

/// Loads stores from fixture directories
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureLoader {
    validator: SchemaValidator,
}

impl FixtureLoader {
    /// Create a loader using `validator`
    #[inline]
    #[must_use]
    pub fn new(validator: SchemaValidator) -> Self {
        Self { validator }
    }

    /// Load every project in `dir`
    ///
    /// # Errors
    /// The directory must exist; see [`read_dir`] and
    /// [`projects_from_fixtures`] for the remaining failure modes.
    pub async fn load_projects(&self, dir: &Path) -> Result<ProjectStore> {
        let fixtures = read_dir(dir).await?;
        let store = projects_from_fixtures(&fixtures, &self.validator)?;
        tracing::info!("Loaded {} projects from {}", store.len(), dir.display());
        Ok(store)
    }

    /// Load every transcript in `dir`
    ///
    /// A missing directory yields an empty store.
    ///
    /// # Errors
    /// See [`read_dir`] and [`transcripts_from_fixtures`].
    pub async fn load_transcripts(&self, dir: &Path) -> Result<TranscriptStore> {
        let fixtures = match read_dir(dir).await {
            Ok(fixtures) => fixtures,
            Err(StoreError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Transcript directory {} not found, continuing without transcripts",
                    dir.display()
                );
                return Ok(TranscriptStore::default());
            }
            Err(e) => return Err(e),
        };
        let store = transcripts_from_fixtures(&fixtures, &self.validator)?;
        tracing::info!("Loaded {} transcripts from {}", store.len(), dir.display());
        Ok(store)
    }
}
