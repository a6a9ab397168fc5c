//! Query service seams
//!
//! The methods are async so a remote data source can slot in later; the
//! in-memory stores answer without suspending. "Not found" is always an empty
//! or absent result, never an error.

use crate::project::Project;
use crate::transcript::Transcript;
use crate::wing::Wing;

/// Read-only access to projects
#[async_trait::async_trait]
pub trait ProjectService: Send + Sync {
    /// All projects in load order, as an owned copy
    async fn get_all(&self) -> Vec<Project>;

    /// Exact, case-sensitive slug match
    async fn get_by_slug(&self, slug: &str) -> Option<Project>;

    /// Projects in `wing`
    async fn get_by_wing(&self, wing: Wing) -> Vec<Project>;

    /// Projects with `min <= completion <= max`; empty when `min > max`
    async fn get_by_completion_range(&self, min: u8, max: u8) -> Vec<Project>;
}

/// Read-only access to transcripts
#[async_trait::async_trait]
pub trait TranscriptService: Send + Sync {
    /// Transcript whose `project_slug` equals `slug`
    async fn get_by_project_slug(&self, slug: &str) -> Option<Transcript>;
}
