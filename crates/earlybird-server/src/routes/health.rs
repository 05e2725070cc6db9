//! Liveness and store-reachability probe.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health probe response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
}

/// Build the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// `GET /v1/sys/health`.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = match state.store.count().await {
        Ok(_) => "reachable",
        Err(e) => {
            tracing::warn!(error = %e, "health probe: store unreachable");
            "unreachable"
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store,
    })
}
