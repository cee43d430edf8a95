//! Tag repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Sqlite};
use tracing::{debug, trace};

use jotpad_core::{normalize_tag_names, Error, NoteRepository, Result, Tag, TagRepository};

use crate::notes::{SqliteNoteRepository, NOTE_NOT_FOUND_MESSAGE};

/// SQLite implementation of TagRepository.
#[derive(Clone)]
pub struct SqliteTagRepository {
    pool: Pool<Sqlite>,
    notes: SqliteNoteRepository,
}

impl SqliteTagRepository {
    /// Create a new SqliteTagRepository with the given connection pool.
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            notes: SqliteNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Return the id of the tag called `name`, creating it if absent.
    ///
    /// Two callers racing on the same name both succeed: the loser's insert
    /// is ignored by the unique constraint and the lookup finds the winner's
    /// row.
    async fn ensure_tag(&self, name: &str) -> Result<i64> {
        sqlx::query("INSERT OR IGNORE INTO tags (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        let id: i64 = sqlx::query_scalar("SELECT id FROM tags WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(id)
    }
}

#[async_trait]
impl TagRepository for SqliteTagRepository {
    async fn list(&self) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(tags)
    }

    async fn attach_to_note(&self, note_id: i64, tags: &[String]) -> Result<()> {
        if !self.notes.exists(note_id).await? {
            return Err(Error::NotFound(NOTE_NOT_FOUND_MESSAGE.to_string()));
        }

        let names = normalize_tag_names(tags);

        // Statements run one at a time without a wrapping transaction; a
        // retry with the same list converges on the same end state.
        for name in &names {
            let tag_id = self.ensure_tag(name).await?;

            sqlx::query("INSERT OR IGNORE INTO note_tags (note_id, tag_id) VALUES (?, ?)")
                .bind(note_id)
                .bind(tag_id)
                .execute(&self.pool)
                .await
                .map_err(Error::Database)?;

            trace!(
                subsystem = "database",
                component = "tags",
                note_id,
                tag_name = %name,
                tag_id,
                "Tag attached"
            );
        }

        debug!(
            subsystem = "database",
            component = "tags",
            op = "attach",
            note_id,
            tag_count = names.len(),
            "Tags attached to note"
        );
        Ok(())
    }

    async fn get_for_note(&self, note_id: i64) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT t.name FROM note_tags nt JOIN tags t ON t.id = nt.tag_id
             WHERE nt.note_id = ? ORDER BY t.name",
        )
        .bind(note_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(names)
    }
}
