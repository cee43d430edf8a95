//! Error types for jotpad.

use thiserror::Error;

/// Result type alias using jotpad's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for jotpad operations.
///
/// The API layer maps `InvalidInput` to 400, `NotFound` to 404 and
/// everything else to a 500 whose message is never shown to clients.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Referenced entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad or missing input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
