//! Tag handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use jotpad_core::TagRepository;

use crate::error::ApiError;
use crate::AppState;

/// `GET /api/tags`
pub async fn list_tags(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let tags = state.db.tags.list().await?;
    Ok(Json(tags))
}
