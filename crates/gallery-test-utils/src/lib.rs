//! Testing utilities for the gallery workspace
//!
//! Sample catalog, record builders and fixture writers.

#![allow(missing_docs)]

use gallery_contracts::{AiSource, Message, ProcessTag, Project, Transcript, Wing};
use gallery_store::{validate_project, validate_transcript, ProjectStore, TranscriptStore};
use serde_json::{json, Value};
use std::path::Path;

pub fn raw_sample_projects() -> Vec<Value> {
    vec![
        json!({
            "slug": "test-project",
            "title": "Test Project",
            "wing": "music",
            "completion": 75,
            "tags": ["THE_BREAKTHROUGH"],
            "aiSource": "claude",
            "dateUpdated": "2025-01-01",
            "pitch": "A test project for validation",
            "quickVersion": "# Test\n\nContent here",
            "recap": "## Analysis\n\nThis is the recap.",
            "relatedProjects": [],
            "hasTranscript": true
        }),
        json!({
            "slug": "song-in-progress",
            "title": "Song In Progress",
            "wing": "music",
            "completion": 60,
            "tags": ["THE_LONG_GAME"],
            "aiSource": "chatgpt",
            "dateStarted": "2024-12-01",
            "dateUpdated": "2025-01-10",
            "pitch": "A melancholic track about digital isolation",
            "quickVersion": "# Verse 1\n\nScreens glow in the dark...",
            "recap": "## Journey\n\nThis song started with a simple melody.",
            "relatedProjects": ["test-project"],
            "hasTranscript": false
        }),
        // Claims a transcript that does not exist.
        json!({
            "slug": "app-prototype",
            "title": "App Prototype",
            "wing": "apps",
            "completion": 85,
            "tags": ["THE_BREAKTHROUGH", "THE_TANGENT"],
            "aiSource": "claude",
            "dateStarted": "2024-11-15",
            "dateUpdated": "2025-01-15",
            "pitch": "A productivity app that actually works",
            "quickVersion": "# Features\n\n- Task management\n- Time tracking",
            "recap": "## Development\n\nBuilding this taught me about state management.",
            "relatedProjects": [],
            "hasTranscript": true
        }),
        json!({
            "slug": "short-story",
            "title": "The Digital Ghost",
            "wing": "stories",
            "completion": 50,
            "tags": ["THE_GRAVEYARD"],
            "aiSource": "gemini",
            "dateStarted": "2024-10-01",
            "dateUpdated": "2025-01-05",
            "pitch": "A haunting tale of AI consciousness",
            "quickVersion": "# Chapter 1\n\nThe server hummed in the darkness...",
            "recap": "## Story Analysis\n\nExploring themes of consciousness and identity.",
            "relatedProjects": [],
            "hasTranscript": false
        }),
        json!({
            "slug": "early-experiment",
            "title": "Early Experiment",
            "wing": "process",
            "completion": 25,
            "tags": ["THE_ARGUMENT"],
            "aiSource": "mixed",
            "dateStarted": "2024-09-01",
            "dateUpdated": "2024-12-20",
            "pitch": "Learning the ropes of AI collaboration",
            "quickVersion": "# Notes\n\nThis was rough but educational.",
            "recap": "## Reflection\n\nThe first steps are always the hardest.",
            "relatedProjects": ["test-project", "app-prototype"],
            "hasTranscript": false
        }),
        json!({
            "slug": "barely-started",
            "title": "Barely Started",
            "wing": "apps",
            "completion": 5,
            "tags": ["THE_LONG_GAME"],
            "aiSource": "claude",
            "dateUpdated": "2025-01-20",
            "pitch": "An ambitious project in its infancy",
            "quickVersion": "# Concept\n\nJust ideas for now...",
            "recap": "## Beginning\n\nEvery journey starts with a single step.",
            "relatedProjects": [],
            "hasTranscript": false
        }),
    ]
}

pub fn raw_sample_transcript() -> Value {
    json!({
        "projectSlug": "test-project",
        "title": "Building Test Project",
        "date": "2025-01-01",
        "messages": [
            {
                "speaker": "human",
                "content": "Let us build a test project to validate our architecture."
            },
            {
                "speaker": "ai",
                "aiSource": "claude",
                "content": "Great idea! I will help you set up the project structure. Let us start with the core contracts.",
                "isHighlight": true,
                "annotation": "The key architectural decision - contracts first"
            },
            {
                "speaker": "human",
                "content": "What should we include in the Project interface?"
            },
            {
                "speaker": "ai",
                "aiSource": "claude",
                "content": "The Project interface should include: slug, title, wing, completion percentage, tags, AI source, dates, content fields (pitch, quickVersion, recap), and connections to related projects and transcripts.",
                "isHighlight": true
            },
            {
                "speaker": "human",
                "content": "Perfect. How do we handle the transcript data?",
                "annotation": "Discussing data structure"
            },
            {
                "speaker": "ai",
                "aiSource": "claude",
                "content": "We will use a discriminated union for Message types. This ensures type safety - human messages cannot have an aiSource, and AI messages must have one."
            },
            {
                "speaker": "human",
                "content": "That makes sense. Let us implement it."
            },
            {
                "speaker": "ai",
                "aiSource": "claude",
                "content": "I will create the contract files now.",
                "isHighlight": true,
                "annotation": "Beginning implementation phase"
            }
        ]
    })
}

pub fn sample_projects() -> Vec<Project> {
    raw_sample_projects()
        .iter()
        .map(|raw| validate_project(raw).unwrap())
        .collect()
}

pub fn sample_transcript() -> Transcript {
    validate_transcript(&raw_sample_transcript()).unwrap()
}

pub fn sample_project_store() -> ProjectStore {
    ProjectStore::new(sample_projects()).unwrap()
}

pub fn sample_transcript_store() -> TranscriptStore {
    TranscriptStore::new([sample_transcript()]).unwrap()
}

/// Minimal valid project
pub fn project(slug: &str, wing: Wing, completion: u8) -> Project {
    Project {
        slug: slug.to_string(),
        title: format!("Project {slug}"),
        wing,
        completion,
        tags: vec![ProcessTag::TheTangent],
        ai_source: AiSource::Claude,
        date_started: None,
        date_updated: "2025-01-01".to_string(),
        pitch: format!("Pitch for {slug}"),
        quick_version: "# Quick".to_string(),
        recap: "## Recap".to_string(),
        related_projects: vec![],
        has_transcript: false,
    }
}

/// Raw record for [`project`]
pub fn raw_project(slug: &str, wing: Wing, completion: u8) -> Value {
    serde_json::to_value(project(slug, wing, completion)).unwrap()
}

pub fn transcript(project_slug: &str) -> Transcript {
    Transcript {
        project_slug: project_slug.to_string(),
        title: Some(format!("Making {project_slug}")),
        date: Some("2025-01-01".to_string()),
        messages: vec![
            Message::human("Where do we start?"),
            Message::ai(AiSource::Claude, "With the contracts.").highlighted(),
        ],
    }
}

pub fn raw_transcript(project_slug: &str) -> Value {
    serde_json::to_value(transcript(project_slug)).unwrap()
}

/// Write `value` to `dir/<name>.json`, creating `dir` if needed
pub fn write_fixture(dir: &Path, name: &str, value: &Value) {
    std::fs::create_dir_all(dir).unwrap();
    let body = serde_json::to_string_pretty(value).unwrap();
    std::fs::write(dir.join(format!("{name}.json")), body).unwrap();
}

/// Lay out the sample catalog as `root/projects` and `root/transcripts`
pub fn write_sample_data(root: &Path) {
    for raw in raw_sample_projects() {
        let slug = raw["slug"].as_str().unwrap().to_string();
        write_fixture(&root.join("projects"), &slug, &raw);
    }
    write_fixture(&root.join("transcripts"), "test-project", &raw_sample_transcript());
}
