//! Error types for the signup workflow.
//!
//! Validation failures are detected locally and surfaced immediately; no
//! remote call is attempted. Store failures return the workflow to idle
//! with nothing retained. Notification failures never appear here — they
//! are advisory and only logged.

use earlybird_store::StoreError;

/// Errors surfaced by the signup workflow.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Name or email is empty after sanitization.
    #[error("missing information: please fill in both name and email")]
    MissingInformation,

    /// The sanitized name failed validation.
    #[error(
        "invalid name: names can only contain letters, spaces, hyphens, apostrophes, and periods (1-50 characters)"
    )]
    InvalidName,

    /// The email failed the minimal shape check.
    #[error("invalid email: please enter a valid email address")]
    InvalidEmail,

    /// Another submission is in flight, or one already completed and the
    /// session has not been reset.
    #[error("a submission is already in progress")]
    Busy,

    /// The lead store rejected the insert.
    #[error("lead store error: {0}")]
    Store(#[from] StoreError),
}
