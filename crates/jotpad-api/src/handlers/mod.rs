//! Route handlers.

pub mod notes;
pub mod tags;

use axum::response::IntoResponse;
use axum::Json;

pub use notes::{attach_tags, create_note, list_notes};
pub use tags::list_tags;

/// `GET /health`
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
