//! Cross-store consistency audit
//!
//! Related slugs, transcript ownership and the `hasTranscript` flag are not
//! enforced at load time. The audit reports where they disagree so the
//! caller can log it.

use crate::project_store::ProjectStore;
use crate::transcript_store::TranscriptStore;
use std::fmt::{self, Display, Formatter};

/// A soft inconsistency between the project and transcript stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// Project claims a transcript that is not loaded
    MissingTranscript {
        /// Project carrying the flag
        slug: String,
    },
    /// Transcript names a project that is not loaded
    OrphanTranscript {
        /// Slug the transcript names
        project_slug: String,
    },
    /// Related slug that resolves to nothing
    UnresolvedRelated {
        /// Project declaring the relation
        slug: String,
        /// Slug that resolves to nothing
        related: String,
    },
}

impl Display for IntegrityIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTranscript { slug } => {
                write!(f, "project '{slug}' has hasTranscript set but no transcript")
            }
            Self::OrphanTranscript { project_slug } => {
                write!(f, "transcript for unknown project '{project_slug}'")
            }
            Self::UnresolvedRelated { slug, related } => {
                write!(f, "project '{slug}' relates to unknown project '{related}'")
            }
        }
    }
}

/// Collect every inconsistency, projects first in load order
#[must_use]
pub fn audit(projects: &ProjectStore, transcripts: &TranscriptStore) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    for project in projects.iter() {
        if project.has_transcript && !transcripts.contains(&project.slug) {
            issues.push(IntegrityIssue::MissingTranscript {
                slug: project.slug.clone(),
            });
        }
        for related in &project.related_projects {
            if !projects.contains(related) {
                issues.push(IntegrityIssue::UnresolvedRelated {
                    slug: project.slug.clone(),
                    related: related.clone(),
                });
            }
        }
    }

    for transcript in transcripts.iter() {
        if !projects.contains(&transcript.project_slug) {
            issues.push(IntegrityIssue::OrphanTranscript {
                project_slug: transcript.project_slug.clone(),
            });
        }
    }

    issues
}
