//! # jotpad-api
//!
//! HTTP server for jotpad: a JSON API over the note store plus the
//! embedded browser client.
//!
//! ## Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/api/notes?q=&tag=` | [`handlers::list_notes`] |
//! | POST | `/api/notes` | [`handlers::create_note`] |
//! | POST | `/api/notes/:id/tags` | [`handlers::attach_tags`] |
//! | GET | `/api/tags` | [`handlers::list_tags`] |
//! | GET | `/health` | [`handlers::health_check`] |
//! | GET | `/`, `/app.js`, `/style.css` | [`static_files`] |
//!
//! Anything else, including a known path with the wrong method, is a JSON
//! 404. A panicking handler answers with the JSON 500.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod static_files;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use jotpad_db::Database;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Build the application router with all middleware attached.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/notes",
            get(handlers::list_notes)
                .post(handlers::create_note)
                .fallback(error::not_found),
        )
        .route(
            "/api/notes/:id/tags",
            post(handlers::attach_tags).fallback(error::not_found),
        )
        .route(
            "/api/tags",
            get(handlers::list_tags).fallback(error::not_found),
        );

    Router::new()
        .merge(api)
        .route("/health", get(handlers::health_check))
        .route("/", get(static_files::index))
        .route("/app.js", get(static_files::app_js))
        .route("/style.css", get(static_files::style_css))
        .fallback(error::not_found)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id =
                        middleware::request_id::request_id_of(request).unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id,
                    )
                })
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(
            middleware::MakeRequestUuidV7,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .expose_headers([header::LOCATION]),
        )
        .layer(axum::middleware::from_fn(middleware::security_headers))
        .with_state(state)
}
