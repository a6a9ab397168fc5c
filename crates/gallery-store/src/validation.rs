//! Schema validation for raw fixture records
//!
//! Turns untyped JSON into [`Project`] and [`Transcript`] values, or a
//! [`ValidationError`] naming the offending field. Input is borrowed and
//! never mutated.

use gallery_contracts::{AiSource, Message, ProcessTag, Project, Speaker, Transcript, Wing};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Pitch length above which a warning is logged
pub const DEFAULT_PITCH_SOFT_LIMIT: usize = 200;

const SPEAKERS: &[&str] = &["human", "ai"];

/// Classification of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Required field absent, null or empty
    MissingField,
    /// Field present with the wrong JSON type
    WrongType,
    /// Numeric field outside its bounds
    OutOfRange,
    /// String outside a closed enumeration
    InvalidEnum,
    /// Field that the record variant must not carry
    UnexpectedField,
}

/// A raw record that does not match the schema
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Required field absent, null or empty
    #[error("invalid or missing field `{field}`")]
    MissingField {
        /// Path of the field
        field: String,
    },

    /// Field has the wrong JSON type
    #[error("field `{field}` must be {expected}, found {found}")]
    WrongType {
        /// Path of the field
        field: String,
        /// Description of the accepted type
        expected: &'static str,
        /// JSON type actually present
        found: &'static str,
    },

    /// Number outside `min..=max`
    #[error("field `{field}` must be between {min} and {max}, found {value}")]
    OutOfRange {
        /// Path of the field
        field: String,
        /// Rejected number
        value: f64,
        /// Inclusive lower bound
        min: u8,
        /// Inclusive upper bound
        max: u8,
    },

    /// Value not in the enumeration
    #[error("field `{field}` has invalid value `{value}`, expected one of: {}", .expected.join(", "))]
    InvalidEnum {
        /// Path of the field
        field: String,
        /// Rejected value
        value: String,
        /// Accepted values
        expected: &'static [&'static str],
    },

    /// Field not allowed on this variant
    #[error("field `{field}` is not allowed {context}")]
    UnexpectedField {
        /// Path of the field
        field: String,
        /// Where the field is not allowed
        context: &'static str,
    },
}

impl ValidationError {
    /// Failure classification
    #[must_use]
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingField { .. } => ValidationErrorKind::MissingField,
            Self::WrongType { .. } => ValidationErrorKind::WrongType,
            Self::OutOfRange { .. } => ValidationErrorKind::OutOfRange,
            Self::InvalidEnum { .. } => ValidationErrorKind::InvalidEnum,
            Self::UnexpectedField { .. } => ValidationErrorKind::UnexpectedField,
        }
    }

    /// Path of the offending field, e.g. `messages[2].aiSource`
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::WrongType { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::InvalidEnum { field, .. }
            | Self::UnexpectedField { field, .. } => field,
        }
    }
}

/// JSON type name for diagnostics
fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field accessor over one JSON object, tracking the path for errors
struct Record<'a> {
    map: &'a Map<String, Value>,
    prefix: String,
}

impl<'a> Record<'a> {
    fn root(raw: &'a Value) -> Result<Self, ValidationError> {
        Self::at(raw, String::new(), "record")
    }

    fn nested(raw: &'a Value, path: String) -> Result<Self, ValidationError> {
        let label = path.clone();
        Self::at(raw, path, &label)
    }

    fn at(raw: &'a Value, prefix: String, label: &str) -> Result<Self, ValidationError> {
        match raw {
            Value::Object(map) => Ok(Self { map, prefix }),
            other => Err(ValidationError::WrongType {
                field: label.to_string(),
                expected: "an object",
                found: json_type(other),
            }),
        }
    }

    fn path(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.prefix, name)
        }
    }

    /// Present and not null
    fn is_present(&self, name: &str) -> bool {
        !matches!(self.map.get(name), None | Some(Value::Null))
    }

    fn wrong_type(&self, name: &str, expected: &'static str, found: &Value) -> ValidationError {
        ValidationError::WrongType {
            field: self.path(name),
            expected,
            found: json_type(found),
        }
    }

    fn missing(&self, name: &str) -> ValidationError {
        ValidationError::MissingField {
            field: self.path(name),
        }
    }

    /// Required string, possibly empty
    fn string(&self, name: &str) -> Result<&'a str, ValidationError> {
        match self.map.get(name) {
            None | Some(Value::Null) => Err(self.missing(name)),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(self.wrong_type(name, "a string", other)),
        }
    }

    /// Required non-empty string
    fn non_empty_string(&self, name: &str) -> Result<&'a str, ValidationError> {
        let value = self.string(name)?;
        if value.is_empty() {
            return Err(self.missing(name));
        }
        Ok(value)
    }

    fn optional_string(&self, name: &str) -> Result<Option<String>, ValidationError> {
        match self.map.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.wrong_type(name, "a string", other)),
        }
    }

    fn boolean(&self, name: &str) -> Result<bool, ValidationError> {
        match self.map.get(name) {
            None | Some(Value::Null) => Err(self.missing(name)),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(self.wrong_type(name, "a boolean", other)),
        }
    }

    fn optional_boolean(&self, name: &str) -> Result<Option<bool>, ValidationError> {
        match self.map.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(self.wrong_type(name, "a boolean", other)),
        }
    }

    fn array(&self, name: &str) -> Result<&'a [Value], ValidationError> {
        match self.map.get(name) {
            None | Some(Value::Null) => Err(self.missing(name)),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(self.wrong_type(name, "an array", other)),
        }
    }

    /// Required non-empty string parsed into a closed enumeration
    fn enumeration<T: FromStr>(
        &self,
        name: &str,
        expected: &'static [&'static str],
    ) -> Result<T, ValidationError> {
        let raw = self.non_empty_string(name)?;
        raw.parse().map_err(|_| ValidationError::InvalidEnum {
            field: self.path(name),
            value: raw.to_string(),
            expected,
        })
    }

    /// Integer percentage in 0..=100
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn percentage(&self, name: &str) -> Result<u8, ValidationError> {
        let value = match self.map.get(name) {
            None | Some(Value::Null) => return Err(self.missing(name)),
            Some(value) => value,
        };
        let Some(number) = value.as_f64() else {
            return Err(self.wrong_type(name, "a number", value));
        };
        if !(0.0..=100.0).contains(&number) {
            return Err(ValidationError::OutOfRange {
                field: self.path(name),
                value: number,
                min: 0,
                max: 100,
            });
        }
        if number.fract() != 0.0 {
            return Err(self.wrong_type(name, "an integer", value));
        }
        Ok(number as u8)
    }
}

/// Validator for project and transcript records
///
/// Every fixture record passes through here exactly once at startup; the
/// first failure aborts loading.
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator {
    pitch_soft_limit: usize,
}

impl SchemaValidator {
    /// Create validator with the default pitch limit
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            pitch_soft_limit: DEFAULT_PITCH_SOFT_LIMIT,
        }
    }

    /// With a different pitch length warning threshold
    #[inline]
    #[must_use]
    pub fn with_pitch_soft_limit(mut self, limit: usize) -> Self {
        self.pitch_soft_limit = limit;
        self
    }

    /// Validate a raw project record
    ///
    /// # Errors
    /// Returns the first schema violation found, checking required strings,
    /// then `wing`, `completion`, the arrays and `hasTranscript`.
    pub fn validate_project(&self, raw: &Value) -> Result<Project, ValidationError> {
        let record = Record::root(raw)?;

        let slug = record.non_empty_string("slug")?;
        let title = record.non_empty_string("title")?;
        let pitch = record.non_empty_string("pitch")?;
        let quick_version = record.non_empty_string("quickVersion")?;
        let recap = record.non_empty_string("recap")?;
        let ai_source: AiSource = record.enumeration("aiSource", AiSource::NAMES)?;
        let date_updated = record.non_empty_string("dateUpdated")?;

        let wing: Wing = record.enumeration("wing", Wing::NAMES)?;
        let completion = record.percentage("completion")?;

        let tags = record
            .array("tags")?
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                let field = format!("tags[{i}]");
                match tag {
                    Value::String(s) => {
                        s.parse::<ProcessTag>()
                            .map_err(|e| ValidationError::InvalidEnum {
                                field,
                                value: e.value,
                                expected: e.expected,
                            })
                    }
                    other => Err(ValidationError::WrongType {
                        field,
                        expected: "a string",
                        found: json_type(other),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let related_projects = record
            .array("relatedProjects")?
            .iter()
            .enumerate()
            .map(|(i, slug)| match slug {
                Value::String(s) => Ok(s.clone()),
                other => Err(ValidationError::WrongType {
                    field: format!("relatedProjects[{i}]"),
                    expected: "a string",
                    found: json_type(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let has_transcript = record.boolean("hasTranscript")?;
        let date_started = record.optional_string("dateStarted")?;

        let pitch_length = pitch.chars().count();
        if pitch_length > self.pitch_soft_limit {
            tracing::warn!(
                "Pitch for '{}' is {} characters (soft limit {})",
                slug,
                pitch_length,
                self.pitch_soft_limit
            );
        }

        Ok(Project {
            slug: slug.to_string(),
            title: title.to_string(),
            wing,
            completion,
            tags,
            ai_source,
            date_started,
            date_updated: date_updated.to_string(),
            pitch: pitch.to_string(),
            quick_version: quick_version.to_string(),
            recap: recap.to_string(),
            related_projects,
            has_transcript,
        })
    }

    /// Validate a raw transcript record
    ///
    /// AI messages must name an `aiSource`; human messages must not carry
    /// one. The offending message is reported by index.
    ///
    /// # Errors
    /// Returns the first schema violation found.
    pub fn validate_transcript(&self, raw: &Value) -> Result<Transcript, ValidationError> {
        let record = Record::root(raw)?;

        let project_slug = record.non_empty_string("projectSlug")?.to_string();
        let title = record.optional_string("title")?;
        let date = record.optional_string("date")?;

        let messages = record
            .array("messages")?
            .iter()
            .enumerate()
            .map(|(i, message)| Self::validate_message(message, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Transcript {
            project_slug,
            title,
            date,
            messages,
        })
    }

    fn validate_message(raw: &Value, index: usize) -> Result<Message, ValidationError> {
        let record = Record::nested(raw, format!("messages[{index}]"))?;

        let speaker = match record.non_empty_string("speaker")? {
            "human" => {
                if record.is_present("aiSource") {
                    return Err(ValidationError::UnexpectedField {
                        field: record.path("aiSource"),
                        context: "on a human message",
                    });
                }
                Speaker::Human
            }
            "ai" => Speaker::Ai {
                ai_source: record.enumeration("aiSource", AiSource::NAMES)?,
            },
            other => {
                return Err(ValidationError::InvalidEnum {
                    field: record.path("speaker"),
                    value: other.to_string(),
                    expected: SPEAKERS,
                })
            }
        };

        Ok(Message {
            speaker,
            content: record.string("content")?.to_string(),
            is_highlight: record.optional_boolean("isHighlight")?,
            annotation: record.optional_string("annotation")?,
        })
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a raw project record with default settings
///
/// # Errors
/// See [`SchemaValidator::validate_project`].
pub fn validate_project(raw: &Value) -> Result<Project, ValidationError> {
    SchemaValidator::new().validate_project(raw)
}

/// Validate a raw transcript record with default settings
///
/// # Errors
/// See [`SchemaValidator::validate_transcript`].
pub fn validate_transcript(raw: &Value) -> Result<Transcript, ValidationError> {
    SchemaValidator::new().validate_transcript(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "slug": "minimal",
            "title": "Minimal",
            "wing": "apps",
            "completion": 0,
            "tags": [],
            "aiSource": "claude",
            "dateUpdated": "2025-01-01",
            "pitch": "Smallest valid record",
            "quickVersion": "# Q",
            "recap": "## R",
            "relatedProjects": [],
            "hasTranscript": false
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut raw = minimal();
        raw[field] = value;
        raw
    }

    fn without(field: &str) -> Value {
        let mut raw = minimal();
        raw.as_object_mut().unwrap().remove(field);
        raw
    }

    #[test]
    fn accepts_minimal_record() {
        let project = validate_project(&minimal()).unwrap();
        assert_eq!(project.slug, "minimal");
        assert_eq!(project.wing, Wing::Apps);
        assert_eq!(project.completion, 0);
        assert!(project.tags.is_empty());
        assert!(project.related_projects.is_empty());
        assert_eq!(project.date_started, None);
    }

    #[test]
    fn accepts_full_record() {
        let raw = json!({
            "slug": "song-in-progress",
            "title": "Song In Progress",
            "wing": "music",
            "completion": 60,
            "tags": ["THE_LONG_GAME", "THE_TANGENT"],
            "aiSource": "chatgpt",
            "dateStarted": "2024-12-01",
            "dateUpdated": "2025-01-10",
            "pitch": "A melancholic track",
            "quickVersion": "# Verse 1",
            "recap": "## Journey",
            "relatedProjects": ["test-project"],
            "hasTranscript": false,
            "extra": "ignored"
        });
        let project = validate_project(&raw).unwrap();
        assert_eq!(project.tags, vec![ProcessTag::TheLongGame, ProcessTag::TheTangent]);
        assert_eq!(project.ai_source, AiSource::Chatgpt);
        assert_eq!(project.date_started.as_deref(), Some("2024-12-01"));
        assert_eq!(project.related_projects, vec!["test-project".to_string()]);
    }

    #[test]
    fn does_not_mutate_input() {
        let raw = minimal();
        let before = raw.clone();
        let _ = validate_project(&raw);
        assert_eq!(raw, before);
    }

    #[test]
    fn rejects_missing_slug() {
        let err = validate_project(&without("slug")).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingField);
        assert_eq!(err.field(), "slug");
        assert!(err.to_string().contains("slug"));
    }

    #[test]
    fn rejects_empty_required_strings() {
        for field in ["slug", "title", "pitch", "quickVersion", "recap", "aiSource", "dateUpdated"] {
            let err = validate_project(&with(field, json!(""))).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::MissingField, "{field}");
            assert_eq!(err.field(), field);
        }
    }

    #[test]
    fn rejects_non_string_required_strings() {
        let err = validate_project(&with("title", json!(42))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                field: "title".to_string(),
                expected: "a string",
                found: "number",
            }
        );
    }

    #[test]
    fn rejects_completion_above_range() {
        let err = validate_project(&with("completion", json!(150))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
        assert_eq!(err.field(), "completion");
    }

    #[test]
    fn rejects_negative_completion() {
        let err = validate_project(&with("completion", json!(-1))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::OutOfRange);
    }

    #[test]
    fn completion_bounds_are_inclusive() {
        assert_eq!(validate_project(&with("completion", json!(100))).unwrap().completion, 100);
        assert_eq!(validate_project(&with("completion", json!(0))).unwrap().completion, 0);
        assert_eq!(validate_project(&with("completion", json!(42.0))).unwrap().completion, 42);
    }

    #[test]
    fn rejects_fractional_completion() {
        let err = validate_project(&with("completion", json!(75.5))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::WrongType);
    }

    #[test]
    fn rejects_non_numeric_completion() {
        let err = validate_project(&with("completion", json!("75"))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::WrongType);
        assert_eq!(err.field(), "completion");
    }

    #[test]
    fn rejects_unknown_wing() {
        let err = validate_project(&with("wing", json!("unknown"))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidEnum);
        assert_eq!(
            err.to_string(),
            "field `wing` has invalid value `unknown`, expected one of: music, apps, stories, process, finished"
        );
    }

    #[test]
    fn rejects_unknown_ai_source() {
        let err = validate_project(&with("aiSource", json!("copilot"))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidEnum);
        assert_eq!(err.field(), "aiSource");
    }

    #[test]
    fn rejects_non_array_tags() {
        let err = validate_project(&with("tags", json!("THE_BREAKTHROUGH"))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::WrongType);
        assert_eq!(err.field(), "tags");
    }

    #[test]
    fn rejects_unknown_tag_by_index() {
        let err = validate_project(&with("tags", json!(["THE_TANGENT", "THE_NAP"]))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidEnum);
        assert_eq!(err.field(), "tags[1]");
    }

    #[test]
    fn rejects_non_array_related_projects() {
        let err = validate_project(&with("relatedProjects", json!({}))).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::WrongType);
        assert_eq!(err.field(), "relatedProjects");

        let err = validate_project(&with("relatedProjects", json!([1]))).unwrap_err();
        assert_eq!(err.field(), "relatedProjects[0]");
    }

    #[test]
    fn has_transcript_must_be_strict_boolean() {
        for value in [json!("true"), json!(1), json!(0)] {
            let err = validate_project(&with("hasTranscript", value)).unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::WrongType);
            assert_eq!(err.field(), "hasTranscript");
        }
    }

    #[test]
    fn date_started_must_be_string_when_present() {
        let err = validate_project(&with("dateStarted", json!(20240101))).unwrap_err();
        assert_eq!(err.field(), "dateStarted");
        assert!(validate_project(&with("dateStarted", Value::Null)).is_ok());
    }

    #[test]
    fn rejects_non_object_record() {
        let err = validate_project(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::WrongType);
        assert_eq!(err.field(), "record");
    }

    #[test]
    fn pitch_over_soft_limit_still_validates() {
        let raw = with("pitch", json!("x".repeat(500)));
        assert!(SchemaValidator::new().with_pitch_soft_limit(10).validate_project(&raw).is_ok());
    }

    fn transcript(messages: Value) -> Value {
        json!({ "projectSlug": "test-project", "title": "Building", "messages": messages })
    }

    #[test]
    fn accepts_transcript() {
        let raw = transcript(json!([
            { "speaker": "human", "content": "Let us build." },
            {
                "speaker": "ai",
                "aiSource": "claude",
                "content": "Great idea!",
                "isHighlight": true,
                "annotation": "contracts first"
            }
        ]));
        let transcript = validate_transcript(&raw).unwrap();
        assert_eq!(transcript.project_slug, "test-project");
        assert_eq!(transcript.title.as_deref(), Some("Building"));
        assert_eq!(transcript.date, None);
        assert_eq!(
            transcript.messages,
            vec![
                Message::human("Let us build."),
                Message::ai(AiSource::Claude, "Great idea!")
                    .highlighted()
                    .with_annotation("contracts first"),
            ]
        );
    }

    #[test]
    fn ai_message_requires_ai_source() {
        let raw = transcript(json!([{ "speaker": "ai", "content": "hi" }]));
        let err = validate_transcript(&raw).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingField);
        assert_eq!(err.field(), "messages[0].aiSource");
    }

    #[test]
    fn human_message_rejects_ai_source() {
        let raw = transcript(json!([
            { "speaker": "human", "content": "ok" },
            { "speaker": "human", "aiSource": "claude", "content": "hi" }
        ]));
        let err = validate_transcript(&raw).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::UnexpectedField);
        assert_eq!(err.field(), "messages[1].aiSource");
    }

    #[test]
    fn human_message_with_null_ai_source_is_accepted() {
        let raw = transcript(json!([{ "speaker": "human", "aiSource": null, "content": "hi" }]));
        assert!(validate_transcript(&raw).is_ok());
    }

    #[test]
    fn rejects_unknown_speaker() {
        let raw = transcript(json!([{ "speaker": "narrator", "content": "..." }]));
        let err = validate_transcript(&raw).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::InvalidEnum);
        assert_eq!(err.field(), "messages[0].speaker");
    }

    #[test]
    fn rejects_non_object_message() {
        let raw = transcript(json!(["hello"]));
        let err = validate_transcript(&raw).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::WrongType);
        assert_eq!(err.field(), "messages[0]");
    }

    #[test]
    fn rejects_transcript_without_messages() {
        let err = validate_transcript(&json!({ "projectSlug": "p" })).unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingField);
        assert_eq!(err.field(), "messages");
    }

    #[test]
    fn rejects_non_boolean_highlight() {
        let raw = transcript(json!([
            { "speaker": "ai", "aiSource": "gemini", "content": "x", "isHighlight": "yes" }
        ]));
        let err = validate_transcript(&raw).unwrap_err();
        assert_eq!(err.field(), "messages[0].isHighlight");
    }
}
