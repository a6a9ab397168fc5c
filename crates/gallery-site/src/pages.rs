//! Page loads
//!
//! Each load takes raw route parameters, resolves them against the wing
//! registry and the services, and returns the data a page renders. Anything
//! that does not resolve becomes [`PageError::NotFound`].

use crate::error::PageError;
use crate::format::{date_label, format_date};
use futures::future::join_all;
use gallery_contracts::{
    Project, ProjectService, Transcript, TranscriptService, Wing, WingConfig, WingRegistry,
};
use serde::Serialize;

/// Listing of one wing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WingPage {
    /// Requested wing
    pub wing: Wing,
    /// Display metadata for the wing
    pub wing_config: &'static WingConfig,
    /// Projects in the wing, load order
    pub projects: Vec<Project>,
}

/// Detail view of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    /// Requested project
    pub project: Project,
    /// Display metadata for its wing
    pub wing_config: &'static WingConfig,
    /// Related projects that resolved, in declared order
    pub related_projects: Vec<Project>,
    /// Formatted `dateUpdated`
    pub updated_label: String,
    /// Formatted `dateStarted`, when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_label: Option<String>,
}

/// Transcript view of one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptPage {
    /// Owning project
    pub project: Project,
    /// Display metadata for its wing
    pub wing_config: &'static WingConfig,
    /// The conversation
    pub transcript: Transcript,
    /// Formatted transcript date, when parseable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_label: Option<String>,
}

/// Load the listing for `wing`
///
/// # Errors
/// [`PageError::NotFound`] if `wing` is not a known wing id.
pub async fn load_wing_page(
    registry: &WingRegistry,
    projects: &dyn ProjectService,
    wing: &str,
) -> Result<WingPage, PageError> {
    let wing_config = registry.get(wing).map_err(|e| {
        tracing::debug!("Wing page miss: {}", e);
        PageError::from(e)
    })?;

    Ok(WingPage {
        wing: wing_config.id,
        wing_config,
        projects: projects.get_by_wing(wing_config.id).await,
    })
}

async fn resolve_project(
    registry: &WingRegistry,
    projects: &dyn ProjectService,
    wing: &str,
    slug: &str,
) -> Result<(&'static WingConfig, Project), PageError> {
    let wing_config = registry.get(wing)?;

    match projects.get_by_slug(slug).await {
        Some(project) if project.wing == wing_config.id => Ok((wing_config, project)),
        found => {
            if let Some(project) = found {
                tracing::debug!(
                    "Project '{}' requested under wing '{}' but belongs to '{}'",
                    slug,
                    wing,
                    project.wing
                );
            }
            Err(PageError::not_found(format!("Project \"{slug}\" not found")))
        }
    }
}

/// Load the detail view for `slug` under `wing`
///
/// Related slugs are looked up concurrently; those that do not resolve are
/// dropped.
///
/// # Errors
/// [`PageError::NotFound`] for an unknown wing, a missing project, or a
/// project filed under a different wing.
pub async fn load_project_page(
    registry: &WingRegistry,
    projects: &dyn ProjectService,
    wing: &str,
    slug: &str,
) -> Result<ProjectPage, PageError> {
    let (wing_config, project) = resolve_project(registry, projects, wing, slug).await?;

    let lookups = project
        .related_projects
        .iter()
        .map(|related| projects.get_by_slug(related));
    let related_projects: Vec<Project> = join_all(lookups).await.into_iter().flatten().collect();

    if related_projects.len() < project.related_projects.len() {
        tracing::debug!(
            "Project '{}': {} of {} related projects unresolved",
            project.slug,
            project.related_projects.len() - related_projects.len(),
            project.related_projects.len()
        );
    }

    Ok(ProjectPage {
        updated_label: date_label(&project.date_updated),
        started_label: project.date_started.as_deref().map(date_label),
        project,
        wing_config,
        related_projects,
    })
}

/// Load the transcript view for `slug` under `wing`
///
/// # Errors
/// [`PageError::NotFound`] as for [`load_project_page`], when the project
/// has no transcript flag, or when the flagged transcript is missing.
pub async fn load_transcript_page(
    registry: &WingRegistry,
    projects: &dyn ProjectService,
    transcripts: &dyn TranscriptService,
    wing: &str,
    slug: &str,
) -> Result<TranscriptPage, PageError> {
    let (wing_config, project) = resolve_project(registry, projects, wing, slug).await?;

    if !project.has_transcript {
        return Err(PageError::not_found(format!(
            "No transcript available for project \"{slug}\""
        )));
    }

    let Some(transcript) = transcripts.get_by_project_slug(slug).await else {
        tracing::warn!("Project '{}' is flagged with a transcript but none is loaded", slug);
        return Err(PageError::not_found(format!(
            "Transcript for project \"{slug}\" not found"
        )));
    };

    Ok(TranscriptPage {
        date_label: transcript.date.as_deref().and_then(format_date),
        project,
        wing_config,
        transcript,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_test_utils::{sample_project_store, sample_transcript_store};
    use pretty_assertions::assert_eq;

    const REGISTRY: WingRegistry = WingRegistry::builtin();

    #[tokio::test]
    async fn wing_page_lists_wing_projects() {
        let projects = sample_project_store();
        let page = load_wing_page(&REGISTRY, &projects, "music").await.unwrap();

        assert_eq!(page.wing, Wing::Music);
        assert_eq!(page.wing_config.name, "Music");
        let slugs: Vec<_> = page.projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["test-project", "song-in-progress"]);
    }

    #[tokio::test]
    async fn empty_wing_is_not_an_error() {
        let projects = sample_project_store();
        let page = load_wing_page(&REGISTRY, &projects, "finished").await.unwrap();
        assert!(page.projects.is_empty());
    }

    #[tokio::test]
    async fn unknown_wing_is_not_found() {
        let projects = sample_project_store();
        let err = load_wing_page(&REGISTRY, &projects, "sculpture").await.unwrap_err();
        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "Wing \"sculpture\" not found");
    }

    #[tokio::test]
    async fn project_page_resolves_related_in_order() {
        let projects = sample_project_store();
        let page = load_project_page(&REGISTRY, &projects, "process", "early-experiment")
            .await
            .unwrap();

        let related: Vec<_> = page.related_projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(related, ["test-project", "app-prototype"]);
        assert_eq!(page.updated_label, "December 20, 2024");
        assert_eq!(page.started_label.as_deref(), Some("September 1, 2024"));
    }

    #[tokio::test]
    async fn project_page_without_start_date() {
        let projects = sample_project_store();
        let page = load_project_page(&REGISTRY, &projects, "music", "test-project")
            .await
            .unwrap();
        assert_eq!(page.started_label, None);
        assert!(page.related_projects.is_empty());
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let projects = sample_project_store();
        let err = load_project_page(&REGISTRY, &projects, "music", "nope")
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Project \"nope\" not found");
    }

    #[tokio::test]
    async fn project_under_wrong_wing_is_not_found() {
        let projects = sample_project_store();
        let err = load_project_page(&REGISTRY, &projects, "apps", "test-project")
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Project \"test-project\" not found");
    }

    #[tokio::test]
    async fn transcript_page() {
        let projects = sample_project_store();
        let transcripts = sample_transcript_store();
        let page = load_transcript_page(&REGISTRY, &projects, &transcripts, "music", "test-project")
            .await
            .unwrap();

        assert_eq!(page.transcript.messages.len(), 8);
        assert_eq!(page.transcript.highlights().count(), 3);
        assert_eq!(page.date_label.as_deref(), Some("January 1, 2025"));
    }

    #[tokio::test]
    async fn transcript_page_without_flag() {
        let projects = sample_project_store();
        let transcripts = sample_transcript_store();
        let err = load_transcript_page(&REGISTRY, &projects, &transcripts, "music", "song-in-progress")
            .await
            .unwrap_err();
        assert_eq!(err.message(), "No transcript available for project \"song-in-progress\"");
    }

    #[tokio::test]
    async fn transcript_page_flag_without_transcript() {
        let projects = sample_project_store();
        let transcripts = sample_transcript_store();
        let err = load_transcript_page(&REGISTRY, &projects, &transcripts, "apps", "app-prototype")
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Transcript for project \"app-prototype\" not found");
    }
}
