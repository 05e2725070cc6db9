//! HTTP route handlers.
//!
//! The JSON API lives under `/v1/*`; the server-rendered landing page and
//! its form handlers live at the root. [`app`] assembles the full router
//! with tracing, CORS, and security-header middleware so the binary and
//! the integration tests drive the identical surface.

pub mod health;
pub mod leads;
pub mod ui;

use axum::Router;
use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    // Concurrency-limit the API to prevent resource exhaustion from
    // scripted clients.
    let api = Router::new()
        .merge(leads::router())
        .nest("/sys", health::router())
        .layer(tower::limit::ConcurrencyLimitLayer::new(64));

    Router::new()
        .nest("/v1", api)
        .merge(ui::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}
