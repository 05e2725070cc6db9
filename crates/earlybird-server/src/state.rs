//! Shared application state.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers. It holds the signup workflow plus direct handles to the
//! store (for read-only queries) and the session flag (for view selection
//! and reset).

use std::sync::Arc;

use earlybird_core::session::SubmissionState;
use earlybird_core::submit::SignupWorkflow;
use earlybird_store::LeadStore;

/// Shared state passed to all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The signup workflow (store + notifier + session behind traits).
    pub workflow: SignupWorkflow,
    /// Direct store handle for count and health queries.
    pub store: Arc<dyn LeadStore>,
    /// Shared submission flag.
    pub session: Arc<SubmissionState>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
