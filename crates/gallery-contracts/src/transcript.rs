//! Conversation transcripts
//!
//! A [`Transcript`] records the human/AI exchange behind a project. Each
//! [`Message`] carries a [`Speaker`]; only the AI variant has an
//! [`AiSource`], so a human message with an AI source cannot be built.

use crate::project::AiSource;
use serde::Serialize;

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "speaker", rename_all = "lowercase")]
pub enum Speaker {
    /// The human collaborator
    Human,
    /// An AI collaborator
    Ai {
        /// Which AI wrote the message
        #[serde(rename = "aiSource")]
        ai_source: AiSource,
    },
}

impl Speaker {
    /// Wire identifier (`human` / `ai`)
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Speaker::Human => "human",
            Speaker::Ai { .. } => "ai",
        }
    }

    /// AI source, for AI speakers
    #[inline]
    #[must_use]
    pub const fn ai_source(&self) -> Option<AiSource> {
        match self {
            Speaker::Human => None,
            Speaker::Ai { ai_source } => Some(*ai_source),
        }
    }
}

/// A single message in a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Author, flattened into `speaker` / `aiSource` on the wire
    #[serde(flatten)]
    pub speaker: Speaker,
    /// Markdown body
    pub content: String,
    /// Marks a significant moment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_highlight: Option<bool>,
    /// Sidebar commentary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl Message {
    /// Message from the human collaborator
    #[must_use]
    pub fn human(content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Human,
            content: content.into(),
            is_highlight: None,
            annotation: None,
        }
    }

    /// Message from an AI collaborator
    #[must_use]
    pub fn ai(ai_source: AiSource, content: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Ai { ai_source },
            content: content.into(),
            is_highlight: None,
            annotation: None,
        }
    }

    /// Mark as highlight
    #[inline]
    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.is_highlight = Some(true);
        self
    }

    /// Attach an annotation
    #[inline]
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Whether the message was written by an AI
    #[inline]
    #[must_use]
    pub fn is_ai(&self) -> bool {
        matches!(self.speaker, Speaker::Ai { .. })
    }

    /// Highlight flag, absent treated as false
    #[inline]
    #[must_use]
    pub fn is_highlight(&self) -> bool {
        self.is_highlight.unwrap_or(false)
    }
}

/// Conversation record for one project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    /// Slug of the owning project; not checked for existence
    pub project_slug: String,
    /// Conversation title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ISO-8601 date of the conversation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Messages in chronological order
    pub messages: Vec<Message>,
}

impl Transcript {
    /// Messages flagged as highlights
    pub fn highlights(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_highlight())
    }
}
