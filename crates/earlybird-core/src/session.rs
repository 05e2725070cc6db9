//! Shared submission state.
//!
//! One [`SubmissionState`] is created at startup and injected wherever the
//! signup flow needs it — there is no ambient global. The state is a
//! three-phase machine, `Idle` → `Submitting` → `Submitted`, where
//! `Submitting` doubles as the in-flight guard serializing concurrent
//! submit attempts. Only the explicit reset action returns a `Submitted`
//! session to `Idle`.

use std::sync::atomic::{AtomicU8, Ordering};

/// Phase of the signup session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No submission in flight; the form is shown.
    Idle,
    /// A submission is in flight; further attempts are rejected.
    Submitting,
    /// A lead was stored; the success view is shown until reset.
    Submitted,
}

const IDLE: u8 = 0;
const SUBMITTING: u8 = 1;
const SUBMITTED: u8 = 2;

/// Injectable submission flag with an explicit reset lifecycle.
#[derive(Debug, Default)]
pub struct SubmissionState {
    phase: AtomicU8,
}

impl SubmissionState {
    /// Create a new state in `Idle`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: AtomicU8::new(IDLE),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.phase.load(Ordering::Acquire) {
            SUBMITTING => Phase::Submitting,
            SUBMITTED => Phase::Submitted,
            _ => Phase::Idle,
        }
    }

    /// True once a submission has completed.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase() == Phase::Submitted
    }

    /// Try to move `Idle` → `Submitting`.
    ///
    /// Returns false if a submission is already in flight or completed —
    /// the caller rejects the attempt without touching the store.
    pub fn begin(&self) -> bool {
        self.phase
            .compare_exchange(IDLE, SUBMITTING, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Move `Submitting` → `Submitted`.
    pub fn complete(&self) {
        self.phase.store(SUBMITTED, Ordering::Release);
    }

    /// Abort an in-flight submission, returning to `Idle`.
    pub fn fail(&self) {
        let _ = self
            .phase
            .compare_exchange(SUBMITTING, IDLE, Ordering::AcqRel, Ordering::Acquire);
    }

    /// Explicit "submit another" action: back to `Idle` from any phase.
    pub fn reset(&self) {
        self.phase.store(IDLE, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state = SubmissionState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.is_submitted());
    }

    #[test]
    fn begin_claims_the_in_flight_slot() {
        let state = SubmissionState::new();
        assert!(state.begin());
        assert_eq!(state.phase(), Phase::Submitting);
        // A concurrent attempt loses.
        assert!(!state.begin());
    }

    #[test]
    fn complete_marks_submitted() {
        let state = SubmissionState::new();
        assert!(state.begin());
        state.complete();
        assert!(state.is_submitted());
        // Submitted blocks new attempts until reset.
        assert!(!state.begin());
    }

    #[test]
    fn fail_returns_to_idle() {
        let state = SubmissionState::new();
        assert!(state.begin());
        state.fail();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.begin());
    }

    #[test]
    fn fail_does_not_clear_submitted() {
        let state = SubmissionState::new();
        assert!(state.begin());
        state.complete();
        state.fail();
        assert!(state.is_submitted());
    }

    #[test]
    fn reset_allows_a_new_submission() {
        let state = SubmissionState::new();
        assert!(state.begin());
        state.complete();
        state.reset();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.begin());
    }
}
