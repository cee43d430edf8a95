//! Structured logging field name constants for jotpad.
//!
//! All crates use these constants for consistent structured logging fields.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Request failed on the server side |
//! | WARN  | Recoverable issue, fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), completed writes |
//! | DEBUG | Query shapes, filter choices |
//! | TRACE | Per-item iteration (individual tags) |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Correlation ID propagated from the `x-request-id` header.
pub const REQUEST_ID: &str = "request_id";

/// Subsystem originating the log event.
/// Values: "api", "database"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "pool", "schema", "notes", "tags"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "insert", "list", "attach"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Note id being operated on.
pub const NOTE_ID: &str = "note_id";

/// Tag name being operated on.
pub const TAG_NAME: &str = "tag_name";

/// Free-text search query.
pub const QUERY: &str = "query";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of rows returned by a query.
pub const RESULT_COUNT: &str = "result_count";

/// Number of tags in an attach request after normalisation.
pub const TAG_COUNT: &str = "tag_count";

// ─── Database fields ───────────────────────────────────────────────────────

/// Number of open connections in the pool.
pub const POOL_SIZE: &str = "pool_size";

/// Number of idle connections in the pool.
pub const POOL_IDLE: &str = "pool_idle";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
