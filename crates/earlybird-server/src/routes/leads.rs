//! Lead capture JSON API.
//!
//! Mirrors the landing-page form for programmatic clients: submit a lead,
//! read the signup count, reset the session for another submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use earlybird_core::submit::RawSubmission;
use earlybird_store::Lead;

use crate::error::AppError;
use crate::state::AppState;

/// Request body for a signup.
#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub industry: Option<String>,
}

/// Response for the signup count.
#[derive(Debug, Serialize)]
pub struct LeadCountResponse {
    pub count: u64,
}

/// Response after a session reset.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub submitted: bool,
}

/// Build the leads router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leads", post(create_lead))
        .route("/leads/count", get(lead_count))
        .route("/leads/reset", post(reset_session))
}

/// `POST /v1/leads` — run the signup workflow.
async fn create_lead(
    State(state): State<AppState>,
    Json(body): Json<CreateLeadRequest>,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    let input = RawSubmission {
        name: body.name,
        email: body.email,
        industry: body.industry.unwrap_or_default(),
    };

    let lead = state.workflow.submit(&input).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

/// `GET /v1/leads/count` — total signups.
///
/// Independent of any in-flight submission; the number is eventually
/// consistent relative to concurrent clients.
async fn lead_count(State(state): State<AppState>) -> Result<Json<LeadCountResponse>, AppError> {
    let count = state.store.count().await?;
    Ok(Json(LeadCountResponse { count }))
}

/// `POST /v1/leads/reset` — the explicit "submit another" action.
async fn reset_session(State(state): State<AppState>) -> Json<ResetResponse> {
    state.session.reset();
    Json(ResetResponse { submitted: false })
}
