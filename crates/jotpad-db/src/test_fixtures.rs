//! Test fixtures for database integration tests.
//!
//! Each [`TestDatabase`] owns a private in-memory store with the schema
//! applied, so tests never see each other's rows.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jotpad_db::test_fixtures::TestDatabase;
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let test_db = TestDatabase::new().await;
//!     let note = test_db.seed_note("Shopping", "milk and eggs", &["errand"]).await;
//!
//!     // Run your tests...
//!
//!     test_db.cleanup().await;
//! }
//! ```

use crate::{Database, NewNote, Note, NoteRepository, TagRepository};

/// Isolated in-memory database for a single test.
pub struct TestDatabase {
    pub db: Database,
}

impl TestDatabase {
    /// Create a fresh in-memory database with the schema applied.
    pub async fn new() -> Self {
        let db = Database::in_memory()
            .await
            .expect("Failed to create in-memory test database");
        Self { db }
    }

    /// Insert a note and attach `tags` to it.
    pub async fn seed_note(&self, title: &str, body: &str, tags: &[&str]) -> Note {
        let new_note = NewNote::new(title, body).expect("Seed note must be valid");
        let note = self
            .db
            .notes
            .insert(new_note)
            .await
            .expect("Failed to insert seed note");

        if !tags.is_empty() {
            let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
            self.db
                .tags
                .attach_to_note(note.id, &tags)
                .await
                .expect("Failed to attach seed tags");
        }
        note
    }

    /// Count rows in one of the schema tables.
    pub async fn count_rows(&self, table: &str) -> i64 {
        let sql = match table {
            "notes" => "SELECT COUNT(*) FROM notes",
            "tags" => "SELECT COUNT(*) FROM tags",
            "note_tags" => "SELECT COUNT(*) FROM note_tags",
            other => panic!("Unknown table '{}'", other),
        };
        sqlx::query_scalar(sql)
            .fetch_one(self.db.pool())
            .await
            .expect("Failed to count rows")
    }

    /// Close the pool.
    pub async fn cleanup(self) {
        self.db.close().await;
    }
}
