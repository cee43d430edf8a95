//! Common test utilities.

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use jotpad_api::{create_router, AppState};
use jotpad_db::{Database, Note, NoteFilter, NoteRepository, Tag, TagRepository};

/// Router backed by a private in-memory database.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: Router,
    pub state: AppState,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn new() -> Self {
        let db = Database::in_memory()
            .await
            .expect("Failed to create in-memory database");
        let state = AppState::new(db);
        let router = create_router(state.clone());
        Self { router, state }
    }

    pub fn db(&self) -> &Database {
        &self.state.db
    }

    /// Every stored note, newest first.
    pub async fn all_notes(&self) -> Vec<Note> {
        self.db()
            .notes
            .list(&NoteFilter::new())
            .await
            .expect("Failed to list notes")
    }

    pub async fn all_tags(&self) -> Vec<Tag> {
        self.db().tags.list().await.expect("Failed to list tags")
    }

    pub async fn tags_of(&self, note_id: i64) -> Vec<String> {
        self.db()
            .tags
            .get_for_note(note_id)
            .await
            .expect("Failed to read note tags")
    }

    /// Create a note through the API and return its JSON.
    pub async fn create_note(&self, title: &str, body: &str) -> Value {
        let (status, json) = json_request(
            &self.router,
            "POST",
            "/api/notes",
            Some(serde_json::json!({ "title": title, "body": body })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);
        json
    }
}

/// Response parts a test usually looks at.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Send a request and collect the whole response.
#[allow(dead_code)]
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// Send a raw body with the given content type.
#[allow(dead_code)]
pub async fn raw_request(
    router: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(router, request).await
}

/// Helper to make JSON requests.
#[allow(dead_code)]
pub async fn json_request(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(v) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    let response = send(router, builder.body(body).unwrap()).await;
    let json = if response.body.is_empty() {
        Value::Null
    } else {
        response.json()
    };
    (response.status, json)
}
