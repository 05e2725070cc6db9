//! The signup workflow.
//!
//! Orchestrates sanitize → validate → insert → notify → state flip. The
//! store and notifier are injected behind traits; the shared
//! [`SubmissionState`] provides the in-flight guard and the submitted
//! flag.
//!
//! Partial-failure semantics: a store failure aborts the submission and
//! returns the session to idle with nothing retained; a notification
//! failure after a successful insert is logged and swallowed — the stored
//! lead is authoritative.

use std::sync::Arc;

use earlybird_store::{Lead, LeadStore, NewLead};
use tracing::{info, warn};

use crate::error::SubmitError;
use crate::notify::{ConfirmationRequest, Notifier};
use crate::sanitize::sanitize;
use crate::session::SubmissionState;
use crate::validate::{is_plausible_email, is_valid_name};

/// Raw form input, exactly as the visitor typed it.
#[derive(Debug, Clone, Default)]
pub struct RawSubmission {
    pub name: String,
    pub email: String,
    pub industry: String,
}

/// The signup workflow. Cheap to clone — all fields are shared handles.
#[derive(Clone)]
pub struct SignupWorkflow {
    store: Arc<dyn LeadStore>,
    notifier: Arc<dyn Notifier>,
    state: Arc<SubmissionState>,
}

impl std::fmt::Debug for SignupWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupWorkflow").finish_non_exhaustive()
    }
}

impl SignupWorkflow {
    /// Assemble a workflow from its injected parts.
    #[must_use]
    pub fn new(
        store: Arc<dyn LeadStore>,
        notifier: Arc<dyn Notifier>,
        state: Arc<SubmissionState>,
    ) -> Self {
        Self {
            store,
            notifier,
            state,
        }
    }

    /// Shared submission state handle.
    #[must_use]
    pub fn state(&self) -> &Arc<SubmissionState> {
        &self.state
    }

    /// Run one submission to completion.
    ///
    /// Validation runs before the in-flight guard is taken, so a rejected
    /// submission leaves the session in `Idle`. A blank industry is stored
    /// as absent and reported to the notifier as `"General"`.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::MissingInformation`] — name or email empty after
    ///   sanitization.
    /// - [`SubmitError::InvalidName`] — sanitized name outside the allowed
    ///   character class or length.
    /// - [`SubmitError::InvalidEmail`] — email fails the shape check.
    /// - [`SubmitError::Busy`] — another submission is in flight or the
    ///   session was not reset after a success.
    /// - [`SubmitError::Store`] — the insert failed; the session is back
    ///   in `Idle` and nothing was retained.
    pub async fn submit(&self, input: &RawSubmission) -> Result<Lead, SubmitError> {
        let name = sanitize(&input.name);
        let email = input.email.trim().to_owned();
        let industry = sanitize(&input.industry);

        if name.is_empty() || email.is_empty() {
            return Err(SubmitError::MissingInformation);
        }
        if !is_valid_name(&name) {
            return Err(SubmitError::InvalidName);
        }
        if !is_plausible_email(&email) {
            return Err(SubmitError::InvalidEmail);
        }

        if !self.state.begin() {
            return Err(SubmitError::Busy);
        }

        let new_lead = NewLead {
            name: name.clone(),
            email: email.clone(),
            industry: if industry.is_empty() {
                None
            } else {
                Some(industry.clone())
            },
        };

        let lead = match self.store.insert(new_lead).await {
            Ok(lead) => lead,
            Err(e) => {
                self.state.fail();
                return Err(SubmitError::Store(e));
            }
        };

        let confirmation = ConfirmationRequest {
            name,
            email,
            industry: if industry.is_empty() {
                "General".to_owned()
            } else {
                industry
            },
        };
        if let Err(e) = self.notifier.send_confirmation(&confirmation).await {
            warn!(error = %e, email = %confirmation.email, "confirmation notification failed");
        }

        self.state.complete();
        info!(lead_id = %lead.id, "lead stored");
        Ok(lead)
    }
}
