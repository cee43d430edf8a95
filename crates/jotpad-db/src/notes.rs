//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::debug;

use jotpad_core::{timestamp_now, Error, NewNote, Note, NoteFilter, NoteRepository, Result};

use crate::escape_like;

/// Message carried by `Error::NotFound` for an unknown note id.
pub const NOTE_NOT_FOUND_MESSAGE: &str = "Note not found";

/// SQLite implementation of NoteRepository.
#[derive(Clone)]
pub struct SqliteNoteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteNoteRepository {
    /// Create a new SqliteNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

// =============================================================================
// HELPER FUNCTIONS FOR LIST QUERY BUILDING
// =============================================================================

const LIST_SELECT: &str = "SELECT n.id, n.title, n.body, n.created_at FROM notes n WHERE 1=1 ";

/// Substring match on title or body. Takes the same pattern twice.
const TEXT_FILTER: &str = r"AND (n.title LIKE ? ESCAPE '\' OR n.body LIKE ? ESCAPE '\') ";

/// Exact tag-name match. EXISTS keeps each note to a single row no matter
/// how many associations it has.
const TAG_FILTER: &str = "AND EXISTS (SELECT 1 FROM note_tags nt JOIN tags t ON t.id = nt.tag_id \
                          WHERE nt.note_id = n.id AND t.name = ?) ";

const LIST_ORDER: &str = "ORDER BY n.created_at DESC, n.id DESC";

/// Build the list query and its bind parameters, in order.
fn build_list_query(filter: &NoteFilter) -> (String, Vec<String>) {
    let mut query = String::from(LIST_SELECT);
    let mut params = Vec::new();

    if let Some(text) = filter.text_filter() {
        let pattern = format!("%{}%", escape_like(text));
        query.push_str(TEXT_FILTER);
        params.push(pattern.clone());
        params.push(pattern);
    }

    if let Some(tag) = filter.tag_filter() {
        query.push_str(TAG_FILTER);
        params.push(tag.to_string());
    }

    query.push_str(LIST_ORDER);
    (query, params)
}

#[async_trait]
impl NoteRepository for SqliteNoteRepository {
    async fn insert(&self, note: NewNote) -> Result<Note> {
        let created_at = timestamp_now();

        let created = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (title, body, created_at) VALUES (?, ?, ?)
             RETURNING id, title, body, created_at",
        )
        .bind(note.title())
        .bind(note.body())
        .bind(&created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "insert",
            note_id = created.id,
            "Note inserted"
        );
        Ok(created)
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM notes WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(exists != 0)
    }

    async fn list(&self, filter: &NoteFilter) -> Result<Vec<Note>> {
        let (sql, params) = build_list_query(filter);

        let mut query = sqlx::query_as::<_, Note>(&sql);
        for param in &params {
            query = query.bind(param);
        }

        let notes = query.fetch_all(&self.pool).await.map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "notes",
            op = "list",
            query = filter.text_filter().unwrap_or(""),
            tag = filter.tag_filter().unwrap_or(""),
            result_count = notes.len(),
            "Notes listed"
        );
        Ok(notes)
    }
}
