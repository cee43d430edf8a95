//! Core traits for jotpad abstractions.
//!
//! These traits define the interfaces that concrete storage backends
//! must satisfy, so handlers and tests can work against any of them.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Repository for note operations.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a new note, stamping it with the current time.
    async fn insert(&self, note: NewNote) -> Result<Note>;

    /// Check if a note exists.
    async fn exists(&self, id: i64) -> Result<bool>;

    /// List notes matching the filter, newest first.
    async fn list(&self, filter: &NoteFilter) -> Result<Vec<Note>>;
}

// =============================================================================
// TAG REPOSITORY TRAITS
// =============================================================================

/// Repository for tag operations.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// List all tags ordered by name.
    async fn list(&self) -> Result<Vec<Tag>>;

    /// Attach tags to a note, creating missing tags.
    ///
    /// Names are trimmed and blanks skipped. Attaching a tag twice is a no-op.
    async fn attach_to_note(&self, note_id: i64, tags: &[String]) -> Result<()>;

    /// Get the names of all tags attached to a note.
    async fn get_for_note(&self, note_id: i64) -> Result<Vec<String>>;
}
