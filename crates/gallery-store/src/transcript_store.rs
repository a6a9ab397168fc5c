//! In-memory transcript store

use crate::error::{Result, StoreError};
use crate::validation::SchemaValidator;
use gallery_contracts::{Transcript, TranscriptService};
use indexmap::IndexMap;
use serde_json::Value;

/// Immutable set of transcripts, at most one per project slug
#[derive(Debug, Clone, Default)]
pub struct TranscriptStore {
    transcripts: IndexMap<String, Transcript>,
}

impl TranscriptStore {
    /// Build from typed transcripts
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateTranscript`] when two transcripts name
    /// the same project.
    pub fn new(transcripts: impl IntoIterator<Item = Transcript>) -> Result<Self> {
        let mut map = IndexMap::new();
        for transcript in transcripts {
            if map.contains_key(&transcript.project_slug) {
                return Err(StoreError::DuplicateTranscript {
                    slug: transcript.project_slug,
                });
            }
            map.insert(transcript.project_slug.clone(), transcript);
        }
        Ok(Self { transcripts: map })
    }

    /// Validate raw records and build the store
    ///
    /// # Errors
    /// Returns the first invalid record, or a duplicate project slug.
    pub fn from_raw<'a>(
        records: impl IntoIterator<Item = &'a Value>,
        validator: &SchemaValidator,
    ) -> Result<Self> {
        let transcripts = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                validator
                    .validate_transcript(raw)
                    .map_err(|source| StoreError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(transcripts)
    }

    /// Number of transcripts
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.transcripts.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transcripts.is_empty()
    }

    /// Borrowing iterator in load order
    pub fn iter(&self) -> impl Iterator<Item = &Transcript> {
        self.transcripts.values()
    }

    /// Borrowing lookup by project slug
    #[inline]
    #[must_use]
    pub fn find(&self, project_slug: &str) -> Option<&Transcript> {
        self.transcripts.get(project_slug)
    }

    /// Whether a transcript exists for `project_slug`
    #[inline]
    #[must_use]
    pub fn contains(&self, project_slug: &str) -> bool {
        self.transcripts.contains_key(project_slug)
    }
}

#[async_trait::async_trait]
impl TranscriptService for TranscriptStore {
    async fn get_by_project_slug(&self, slug: &str) -> Option<Transcript> {
        self.find(slug).cloned()
    }
}
