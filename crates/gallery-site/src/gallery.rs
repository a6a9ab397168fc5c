//! Gallery state shared by every page load

use crate::config::SiteConfig;
use crate::error::{PageError, Result};
use crate::pages::{
    load_project_page, load_transcript_page, load_wing_page, ProjectPage, TranscriptPage,
    WingPage,
};
use gallery_contracts::{Project, ProjectService, WingRegistry};
use gallery_store::{audit, FixtureLoader, IntegrityIssue, ProjectStore, TranscriptStore};
use std::sync::Arc;

/// Loaded catalog plus the wing registry
///
/// Cheap to clone; the stores are shared.
#[derive(Debug, Clone)]
pub struct Gallery {
    projects: Arc<ProjectStore>,
    transcripts: Arc<TranscriptStore>,
    registry: WingRegistry,
}

impl Gallery {
    /// Assemble from prebuilt stores
    ///
    /// Integrity issues are logged, not rejected.
    #[must_use]
    pub fn new(projects: ProjectStore, transcripts: TranscriptStore) -> Self {
        let gallery = Self {
            projects: Arc::new(projects),
            transcripts: Arc::new(transcripts),
            registry: WingRegistry::builtin(),
        };
        for issue in gallery.audit() {
            tracing::warn!("Integrity: {}", issue);
        }
        gallery
    }

    /// Load both stores from the configured data directory
    ///
    /// # Errors
    /// Returns the first fixture that fails to read, parse or validate.
    pub async fn load(config: &SiteConfig) -> Result<Self> {
        let loader = FixtureLoader::new(config.validator());
        let projects = loader.load_projects(&config.projects_path()).await?;
        let transcripts = loader.load_transcripts(&config.transcripts_path()).await?;
        Ok(Self::new(projects, transcripts))
    }

    /// Project store
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    /// Transcript store
    #[inline]
    #[must_use]
    pub fn transcripts(&self) -> &TranscriptStore {
        &self.transcripts
    }

    /// Wing registry
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &WingRegistry {
        &self.registry
    }

    /// Cross-store consistency issues
    #[must_use]
    pub fn audit(&self) -> Vec<IntegrityIssue> {
        audit(&self.projects, &self.transcripts)
    }

    /// Wing listing
    ///
    /// # Errors
    /// See [`load_wing_page`].
    pub async fn wing_page(&self, wing: &str) -> std::result::Result<WingPage, PageError> {
        load_wing_page(&self.registry, self.projects.as_ref(), wing).await
    }

    /// Project detail
    ///
    /// # Errors
    /// See [`load_project_page`].
    pub async fn project_page(
        &self,
        wing: &str,
        slug: &str,
    ) -> std::result::Result<ProjectPage, PageError> {
        load_project_page(&self.registry, self.projects.as_ref(), wing, slug).await
    }

    /// Transcript view
    ///
    /// # Errors
    /// See [`load_transcript_page`].
    pub async fn transcript_page(
        &self,
        wing: &str,
        slug: &str,
    ) -> std::result::Result<TranscriptPage, PageError> {
        load_transcript_page(
            &self.registry,
            self.projects.as_ref(),
            self.transcripts.as_ref(),
            wing,
            slug,
        )
        .await
    }

    /// Projects whose completion lies in `min..=max`
    pub async fn completion_range(&self, min: u8, max: u8) -> Vec<Project> {
        self.projects.get_by_completion_range(min, max).await
    }
}
