//! Schema bootstrap.
//!
//! The schema is created with `IF NOT EXISTS` statements and applied on
//! every startup. `note_tags` rows cascade away with their note or tag;
//! this relies on `foreign_keys` being enabled by [`crate::pool`].
//!
//! `idx_notes_title_body` cannot serve the `LIKE '%text%'` search because
//! of the leading wildcard, so text search is a full scan of `notes`.

use sqlx::SqlitePool;
use tracing::info;

use jotpad_core::{Error, Result};

/// DDL statements, in dependency order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS notes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        body TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tags (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS note_tags (
        note_id INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
        tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
        PRIMARY KEY (note_id, tag_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_notes_title_body ON notes(title, body)",
    "CREATE INDEX IF NOT EXISTS idx_tags_name ON tags(name)",
    "CREATE INDEX IF NOT EXISTS idx_note_tags_tag ON note_tags(tag_id)",
];

/// Create all tables and indexes that do not exist yet.
pub async fn apply_schema(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await.map_err(Error::Database)?;
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(*statement)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;
    }
    tx.commit().await.map_err(Error::Database)?;

    info!(
        subsystem = "database",
        component = "schema",
        op = "apply",
        statements = SCHEMA_STATEMENTS.len(),
        "Schema ready"
    );
    Ok(())
}
