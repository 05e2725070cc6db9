//! Store error types.
//!
//! Every variant carries enough context to diagnose the problem without a
//! debugger. Reasons come from the backend and may include connection
//! details — log them, do not put them in HTTP responses.

/// Errors that can occur during lead store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to open or connect to the backing store.
    #[error("failed to open lead store at '{target}': {reason}")]
    Open { target: String, reason: String },

    /// Failed to insert a lead.
    #[error("failed to insert lead: {reason}")]
    Insert { reason: String },

    /// Failed to count leads.
    #[error("failed to count leads: {reason}")]
    Count { reason: String },
}
