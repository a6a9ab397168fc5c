//! Portfolio project records
//!
//! A [`Project`] is a single creative work with its classification,
//! metadata, markdown content and links to related work.

use crate::wing::Wing;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A string that is not a member of a closed enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} `{value}`, expected one of: {}", .expected.join(", "))]
pub struct ParseEnumError {
    /// Name of the enumeration
    pub kind: &'static str,
    /// The rejected value
    pub value: String,
    /// Accepted values
    pub expected: &'static [&'static str],
}

/// AI tool(s) that helped create a project or wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiSource {
    /// Anthropic Claude
    Claude,
    /// OpenAI ChatGPT
    Chatgpt,
    /// Google Gemini
    Gemini,
    /// Several tools together
    Mixed,
}

impl AiSource {
    /// Every AI source
    pub const ALL: [AiSource; 4] = [
        AiSource::Claude,
        AiSource::Chatgpt,
        AiSource::Gemini,
        AiSource::Mixed,
    ];

    /// Wire identifiers
    pub const NAMES: &'static [&'static str] = &["claude", "chatgpt", "gemini", "mixed"];

    /// Wire identifier of this source
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            AiSource::Claude => "claude",
            AiSource::Chatgpt => "chatgpt",
            AiSource::Gemini => "gemini",
            AiSource::Mixed => "mixed",
        }
    }
}

impl Display for AiSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AiSource {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "aiSource",
                value: s.to_string(),
                expected: Self::NAMES,
            })
    }
}

/// Notable pattern in an AI-assisted creative session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessTag {
    /// Eureka moments, key insights
    TheBreakthrough,
    /// Productive disagreement between human and AI
    TheArgument,
    /// Failed attempts and instructive dead ends
    TheGraveyard,
    /// Persistence and gradual progress
    TheLongGame,
    /// Diversions that led somewhere unexpected
    TheTangent,
}

impl ProcessTag {
    /// Every process tag
    pub const ALL: [ProcessTag; 5] = [
        ProcessTag::TheBreakthrough,
        ProcessTag::TheArgument,
        ProcessTag::TheGraveyard,
        ProcessTag::TheLongGame,
        ProcessTag::TheTangent,
    ];

    /// Wire identifiers
    pub const NAMES: &'static [&'static str] = &[
        "THE_BREAKTHROUGH",
        "THE_ARGUMENT",
        "THE_GRAVEYARD",
        "THE_LONG_GAME",
        "THE_TANGENT",
    ];

    /// Wire identifier of this tag
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ProcessTag::TheBreakthrough => "THE_BREAKTHROUGH",
            ProcessTag::TheArgument => "THE_ARGUMENT",
            ProcessTag::TheGraveyard => "THE_GRAVEYARD",
            ProcessTag::TheLongGame => "THE_LONG_GAME",
            ProcessTag::TheTangent => "THE_TANGENT",
        }
    }
}

impl Display for ProcessTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessTag {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "process tag",
                value: s.to_string(),
                expected: Self::NAMES,
            })
    }
}

/// A portfolio item
///
/// Instances are produced by the schema validator and are immutable for the
/// lifetime of the store that holds them. There is intentionally no
/// `Deserialize` impl: raw records must go through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    // Identity
    /// Unique URL-safe identifier
    pub slug: String,
    /// Display title
    pub title: String,

    // Classification
    /// Category
    pub wing: Wing,
    /// Progress percentage, 0..=100
    pub completion: u8,
    /// Process tags, possibly empty
    pub tags: Vec<ProcessTag>,

    // Metadata
    /// AI tool(s) involved
    pub ai_source: AiSource,
    /// ISO-8601 start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_started: Option<String>,
    /// ISO-8601 last-modified date
    pub date_updated: String,

    // Content
    /// One-line hook, plain text
    pub pitch: String,
    /// Markdown; the creative output itself
    pub quick_version: String,
    /// Markdown; the analysis
    pub recap: String,

    // Connections
    /// Slugs of related projects, not checked for existence
    pub related_projects: Vec<String>,
    /// Advisory flag that a transcript exists
    pub has_transcript: bool,
}

impl Project {
    /// Check whether the project carries `tag`
    #[inline]
    #[must_use]
    pub fn has_tag(&self, tag: ProcessTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Check whether `completion` lies in `min..=max`
    #[inline]
    #[must_use]
    pub fn completion_within(&self, min: u8, max: u8) -> bool {
        (min..=max).contains(&self.completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Project {
        Project {
            slug: "test-project".to_string(),
            title: "Test Project".to_string(),
            wing: Wing::Music,
            completion: 75,
            tags: vec![ProcessTag::TheBreakthrough],
            ai_source: AiSource::Claude,
            date_started: None,
            date_updated: "2025-01-01".to_string(),
            pitch: "A test project for validation".to_string(),
            quick_version: "# Test\n\nContent here".to_string(),
            recap: "## Analysis\n\nThis is the recap.".to_string(),
            related_projects: vec![],
            has_transcript: true,
        }
    }

    #[test]
    fn ai_source_parse() {
        assert_eq!("chatgpt".parse::<AiSource>(), Ok(AiSource::Chatgpt));
        let err = "copilot".parse::<AiSource>().unwrap_err();
        assert_eq!(err.value, "copilot");
        assert_eq!(
            err.to_string(),
            "invalid aiSource `copilot`, expected one of: claude, chatgpt, gemini, mixed"
        );
    }

    #[test]
    fn process_tag_parse() {
        for tag in ProcessTag::ALL {
            assert_eq!(tag.as_str().parse::<ProcessTag>(), Ok(tag));
        }
        assert!("the_breakthrough".parse::<ProcessTag>().is_err());
    }

    #[test]
    fn names_match_serde() {
        for (tag, name) in ProcessTag::ALL.iter().zip(ProcessTag::NAMES) {
            assert_eq!(serde_json::to_value(tag).unwrap(), *name);
        }
        for (source, name) in AiSource::ALL.iter().zip(AiSource::NAMES) {
            assert_eq!(serde_json::to_value(source).unwrap(), *name);
        }
    }

    #[test]
    fn project_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["quickVersion"], "# Test\n\nContent here");
        assert_eq!(value["aiSource"], "claude");
        assert_eq!(value["hasTranscript"], true);
        assert_eq!(value["tags"], serde_json::json!(["THE_BREAKTHROUGH"]));
        assert!(value.get("dateStarted").is_none());
    }

    #[test]
    fn completion_within_is_inclusive() {
        let project = sample();
        assert!(project.completion_within(75, 75));
        assert!(project.completion_within(0, 100));
        assert!(!project.completion_within(76, 100));
        assert!(!project.completion_within(80, 70));
    }

    #[test]
    fn has_tag() {
        let project = sample();
        assert!(project.has_tag(ProcessTag::TheBreakthrough));
        assert!(!project.has_tag(ProcessTag::TheTangent));
    }
}
