//! Confirmation notification seam.
//!
//! After a lead is stored the workflow fires a best-effort confirmation.
//! The stored lead is authoritative and the notification advisory: a
//! failure here is logged by the caller and never fails the signup.

use serde::Serialize;

/// Payload for the remote confirmation function.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationRequest {
    pub name: String,
    pub email: String,
    /// Defaulted to `"General"` when the signup left industry blank.
    pub industry: String,
}

/// Errors from a notification backend.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The notification endpoint could not be reached.
    #[error("notification transport error: {reason}")]
    Transport { reason: String },

    /// The notification endpoint answered with a non-success status.
    #[error("notification endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A confirmation-notification backend.
///
/// Implementations must be safe to share across async tasks.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync + 'static {
    /// Dispatch a confirmation for a freshly stored lead.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the dispatch failed. Callers treat the
    /// error as advisory.
    async fn send_confirmation(&self, request: &ConfirmationRequest) -> Result<(), NotifyError>;
}

/// A notifier that does nothing.
///
/// Used in tests and in deployments without a configured confirmation
/// function.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

#[async_trait::async_trait]
impl Notifier for NoopNotifier {
    async fn send_confirmation(&self, _request: &ConfirmationRequest) -> Result<(), NotifyError> {
        Ok(())
    }
}
