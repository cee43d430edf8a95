//! # jotpad-db
//!
//! SQLite database layer for jotpad.
//!
//! This crate provides:
//! - Connection pool management with foreign keys enforced
//! - Idempotent schema bootstrap
//! - Repository implementations for notes and tags
//!
//! ## Example
//!
//! ```rust,ignore
//! use jotpad_db::{Database, NewNote, NoteRepository, TagRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("notes.db").await?;
//!     db.migrate().await?;
//!
//!     let note = db.notes.insert(NewNote::new("Shopping", "milk and eggs")?).await?;
//!     db.tags.attach_to_note(note.id, &["errand".to_string()]).await?;
//!
//!     println!("Created note: {}", note.id);
//!     db.close().await;
//!     Ok(())
//! }
//! ```
pub mod notes;
pub mod pool;
pub mod schema;
pub mod tags;

// Test fixtures for integration tests
pub mod test_fixtures;

// Re-export core types
pub use jotpad_core::*;

/// Escape LIKE wildcard characters (`%`, `_`, `\`) in user input.
///
/// The result is meant for patterns declared with `ESCAPE '\'`.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// Re-export repository implementations
pub use notes::SqliteNoteRepository;
pub use pool::{
    create_pool, create_pool_with_config, is_in_memory, log_pool_metrics, PoolConfig,
    IN_MEMORY_PATH,
};
pub use schema::apply_schema;
pub use tags::SqliteTagRepository;

/// Combined database context with all repositories.
///
/// Cloning is cheap; every clone shares the same pool.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::SqlitePool,
    /// Note repository.
    pub notes: SqliteNoteRepository,
    /// Tag repository.
    pub tags: SqliteTagRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            notes: SqliteNoteRepository::new(pool.clone()),
            tags: SqliteTagRepository::new(pool.clone()),
            pool,
        }
    }

    /// Open the database file at `path` (or `:memory:`).
    pub async fn connect(path: &str) -> Result<Self> {
        let pool = create_pool(path).await?;
        Ok(Self::new(pool))
    }

    /// Open with custom pool configuration.
    pub async fn connect_with_config(path: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(path, config).await?;
        Ok(Self::new(pool))
    }

    /// Open a private in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self> {
        let db = Self::connect(IN_MEMORY_PATH).await?;
        db.migrate().await?;
        Ok(db)
    }

    /// Create any missing tables and indexes.
    pub async fn migrate(&self) -> Result<()> {
        apply_schema(&self.pool).await
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }

    /// Close every connection in the pool, waiting for in-flight queries.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!(
            subsystem = "database",
            component = "pool",
            op = "close",
            "Database connection pool closed"
        );
    }
}
