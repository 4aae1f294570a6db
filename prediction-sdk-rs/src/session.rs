//! Submission session
//!
//! Holds the editable draft of one estimate form and drives a submission:
//! validate locally, send at most one request at a time, keep the last
//! outcome. Once closed, a request that completes late is dropped instead of
//! being stored.
//!
//! The state lock is a plain `std::sync::Mutex` and is never held across an
//! `.await`. The pending flag is cleared when a submission ends, including
//! when its future is dropped before the request completes.

use std::sync::{Mutex, MutexGuard, PoisonError};

use input_validation::{FieldErrors, InputCollector};
use property_types::{PredictionResult, PropertyDraft};
use thiserror::Error;
use tracing::debug;

use crate::core::Predictor;

/// Result of the last finished submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The service returned an estimate
    Predicted(PredictionResult),

    /// Local validation failed; nothing was sent
    Invalid(FieldErrors),

    /// The request failed; holds the message to display
    Failed(String),
}

impl SubmissionOutcome {
    pub fn prediction(&self) -> Option<&PredictionResult> {
        match self {
            SubmissionOutcome::Predicted(result) => Some(result),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("A prediction request is already in progress")]
    AlreadyPending,

    #[error("Session is closed")]
    Closed,
}

#[derive(Debug, Default)]
struct SessionState {
    draft: PropertyDraft,
    pending: bool,
    outcome: Option<SubmissionOutcome>,
    closed: bool,
}

fn lock_state(state: &Mutex<SessionState>) -> MutexGuard<'_, SessionState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Releases the pending flag of an in-flight submission on every exit path
struct PendingGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        lock_state(self.state).pending = false;
    }
}

/// Form state plus the predictor that serves it
#[derive(Debug)]
pub struct PredictionSession<P: Predictor> {
    predictor: P,
    collector: InputCollector,
    state: Mutex<SessionState>,
}

impl<P: Predictor> PredictionSession<P> {
    /// New session with an empty draft
    pub fn new(predictor: P, collector: InputCollector) -> Self {
        Self {
            predictor,
            collector,
            state: Mutex::new(SessionState::default()),
        }
    }

    /// Replace the initial draft
    pub fn with_draft(self, draft: PropertyDraft) -> Self {
        self.lock().draft = draft;
        self
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    /// Edit the draft in place
    pub fn update_draft<F>(&self, edit: F) -> Result<(), SessionError>
    where
        F: FnOnce(&mut PropertyDraft),
    {
        let mut state = self.lock();
        if state.closed {
            return Err(SessionError::Closed);
        }
        edit(&mut state.draft);
        Ok(())
    }

    /// Copy of the current draft
    pub fn draft(&self) -> PropertyDraft {
        self.lock().draft.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Outcome of the last finished submission, if any
    pub fn outcome(&self) -> Option<SubmissionOutcome> {
        self.lock().outcome.clone()
    }

    /// Tear the session down. A submission still in flight finishes with
    /// [`SessionError::Closed`] and its result is not stored.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.pending = false;
    }

    /// Validate the draft and, if it is valid, request an estimate
    pub async fn submit(&self) -> Result<SubmissionOutcome, SessionError> {
        let description = {
            let mut state = self.lock();
            if state.closed {
                return Err(SessionError::Closed);
            }
            if state.pending {
                return Err(SessionError::AlreadyPending);
            }

            match self.collector.validate(&state.draft) {
                Ok(description) => {
                    state.outcome = None;
                    state.pending = true;
                    description
                }
                Err(errors) => {
                    let outcome = SubmissionOutcome::Invalid(errors);
                    state.outcome = Some(outcome.clone());
                    return Ok(outcome);
                }
            }
        };
        // Bound before the final lock below, so it is dropped after that lock is released
        let _pending = PendingGuard { state: &self.state };

        let outcome = match self.predictor.predict(&description).await {
            Ok(result) => SubmissionOutcome::Predicted(result),
            Err(e) => SubmissionOutcome::Failed(e.message().to_string()),
        };

        let mut state = self.lock();
        if state.closed {
            debug!(locality = %description.locality_name, "session closed, discarding late outcome");
            return Err(SessionError::Closed);
        }

        state.pending = false;
        state.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        lock_state(&self.state)
    }
}
