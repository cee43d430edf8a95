//! Note handlers.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use tracing::{debug, info};

use jotpad_core::tags::TAGS_NOT_ARRAY_MESSAGE;
use jotpad_core::{
    parse_tag_list, NewNote, NoteFilter, NoteRepository, TagRepository, INVALID_NOTE_MESSAGE,
};

use crate::error::ApiError;
use crate::AppState;

/// Message returned when the `:id` segment is not a positive integer.
pub const INVALID_NOTE_ID_MESSAGE: &str = "Invalid note id";

/// Parse the `:id` path segment. Only positive integers are note ids.
pub fn parse_note_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Read a string field from a JSON object; anything else counts as empty.
fn string_field<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(Value::as_str).unwrap_or("")
}

/// `GET /api/notes?q=&tag=`
///
/// Repeated keys use their first value. A query string that cannot be decoded
/// lists every note.
pub async fn list_notes(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            debug!(subsystem = "api", error = %rejection, "Ignoring undecodable note query");
            Vec::new()
        }
    };
    let filter = NoteFilter::from_query_pairs(pairs);

    let notes = state.db.notes.list(&filter).await?;
    Ok(Json(notes))
}

/// `POST /api/notes`
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(subsystem = "api", error = %rejection, "Rejected note body");
        ApiError::BadRequest(INVALID_NOTE_MESSAGE.to_string())
    })?;

    let new_note = NewNote::new(
        string_field(&payload, "title"),
        string_field(&payload, "body"),
    )?;
    let note = state.db.notes.insert(new_note).await?;

    info!(subsystem = "api", op = "create_note", note_id = note.id, "Note created");

    let location = format!("/api/notes/{}", note.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(note)))
}

/// `POST /api/notes/:id/tags`
///
/// Checks run in order: id, body shape, note existence. A request that
/// fails any of them writes nothing.
pub async fn attach_tags(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let note_id = id
        .ok()
        .and_then(|Path(raw)| parse_note_id(&raw))
        .ok_or_else(|| ApiError::BadRequest(INVALID_NOTE_ID_MESSAGE.to_string()))?;

    let Json(payload) = payload.map_err(|rejection| {
        debug!(subsystem = "api", error = %rejection, "Rejected tags body");
        ApiError::BadRequest(TAGS_NOT_ARRAY_MESSAGE.to_string())
    })?;
    let tags = parse_tag_list(payload.get("tags"))?;

    state.db.tags.attach_to_note(note_id, &tags).await?;

    info!(
        subsystem = "api",
        op = "attach_tags",
        note_id,
        tag_count = tags.len(),
        "Tags attached"
    );
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_note_id_accepts_positive_integers() {
        assert_eq!(parse_note_id("1"), Some(1));
        assert_eq!(parse_note_id("42"), Some(42));
    }

    #[test]
    fn test_parse_note_id_rejects_everything_else() {
        for raw in ["0", "-3", "abc", "", "1.5", "NaN", "99999999999999999999"] {
            assert_eq!(parse_note_id(raw), None, "'{}' should be rejected", raw);
        }
    }

    #[test]
    fn test_string_field_defaults_to_empty() {
        let payload = serde_json::json!({ "title": 5, "body": "text" });
        assert_eq!(string_field(&payload, "title"), "");
        assert_eq!(string_field(&payload, "body"), "text");
        assert_eq!(string_field(&payload, "missing"), "");
        assert_eq!(string_field(&Value::Null, "title"), "");
    }
}
