//! In-memory project store

use crate::error::{Result, StoreError};
use crate::validation::SchemaValidator;
use gallery_contracts::{Project, ProjectService, Wing};
use indexmap::IndexMap;
use serde_json::Value;

/// Immutable catalog of validated projects, keyed by slug
///
/// Iteration follows load order. Queries hand out clones so callers can
/// never reach the stored records.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: IndexMap<String, Project>,
}

impl ProjectStore {
    /// Build from already-typed projects
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateSlug`] if two projects share a slug.
    pub fn new(projects: impl IntoIterator<Item = Project>) -> Result<Self> {
        let mut map = IndexMap::new();
        for project in projects {
            if map.contains_key(&project.slug) {
                return Err(StoreError::DuplicateSlug { slug: project.slug });
            }
            map.insert(project.slug.clone(), project);
        }
        Ok(Self { projects: map })
    }

    /// Validate raw records and build the store
    ///
    /// # Errors
    /// Returns the first invalid record, or a duplicate slug.
    pub fn from_raw<'a>(
        records: impl IntoIterator<Item = &'a Value>,
        validator: &SchemaValidator,
    ) -> Result<Self> {
        let projects = records
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                validator
                    .validate_project(raw)
                    .map_err(|source| StoreError::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(projects)
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the store holds no projects
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Borrowing iterator in load order
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.values()
    }

    /// Whether `slug` is present
    #[inline]
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.projects.contains_key(slug)
    }

    /// Borrowing slug lookup
    #[inline]
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&Project> {
        self.projects.get(slug)
    }

    /// Projects in `wing`, load order
    pub fn in_wing(&self, wing: Wing) -> impl Iterator<Item = &Project> {
        self.iter().filter(move |p| p.wing == wing)
    }

    /// Projects with completion in `min..=max`, load order
    pub fn in_completion_range(&self, min: u8, max: u8) -> impl Iterator<Item = &Project> {
        self.iter().filter(move |p| p.completion_within(min, max))
    }
}

#[async_trait::async_trait]
impl ProjectService for ProjectStore {
    async fn get_all(&self) -> Vec<Project> {
        self.iter().cloned().collect()
    }

    async fn get_by_slug(&self, slug: &str) -> Option<Project> {
        self.find(slug).cloned()
    }

    async fn get_by_wing(&self, wing: Wing) -> Vec<Project> {
        self.in_wing(wing).cloned().collect()
    }

    async fn get_by_completion_range(&self, min: u8, max: u8) -> Vec<Project> {
        self.in_completion_range(min, max).cloned().collect()
    }
}
