//! Core data models for jotpad.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Message returned when a note's title or body is missing or blank.
pub const INVALID_NOTE_MESSAGE: &str = "Invalid title/body";

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    /// ISO-8601 UTC timestamp with millisecond precision, assigned on insert.
    pub created_at: String,
}

impl Note {
    /// Parse `created_at` back into a timestamp.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// A validated note that has not been stored yet.
///
/// Construction trims both fields and rejects blanks, so any `NewNote`
/// can be inserted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    title: String,
    body: String,
}

impl NewNote {
    pub fn new(title: &str, body: &str) -> Result<Self> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() || body.is_empty() {
            return Err(Error::InvalidInput(INVALID_NOTE_MESSAGE.to_string()));
        }
        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Filter for listing notes. Both fields are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Substring matched against title or body.
    pub text: Option<String>,
    /// Exact tag name the note must carry.
    pub tag: Option<String>,
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from decoded query-string pairs.
    ///
    /// `q` sets the text filter and `tag` the tag filter. When a key repeats
    /// the first value wins; unknown keys are ignored.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "q" => &mut filter.text,
                "tag" => &mut filter.tag,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        filter
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Text filter, with an empty string treated as absent.
    pub fn text_filter(&self) -> Option<&str> {
        self.text.as_deref().filter(|s| !s.is_empty())
    }

    /// Tag filter, with an empty string treated as absent.
    pub fn tag_filter(&self) -> Option<&str> {
        self.tag.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.text_filter().is_none() && self.tag_filter().is_none()
    }
}

// =============================================================================
// TAG TYPES
// =============================================================================

/// A tag definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

// =============================================================================
// TIMESTAMPS
// =============================================================================

/// Format a timestamp the way notes store it, e.g. `2026-10-19T08:15:30.123Z`.
pub fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current time in note timestamp format.
pub fn timestamp_now() -> String {
    format_timestamp(Utc::now())
}
