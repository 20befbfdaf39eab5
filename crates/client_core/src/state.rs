use std::fmt;

use uuid::Uuid;

use crate::{classifier::RiskAssessment, error::SubmitError};

/// Opaque identifier for one submission attempt. Comparing the token stored
/// at issue time against the controller's active token is what lets a stale
/// response be recognized and discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(Uuid);

impl RequestToken {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The single view-state value. Owned exclusively by the submission
/// controller and only ever replaced, never mutated in place; everything
/// else observes it through `current_state` or the broadcast channel.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting(RequestToken),
    Success(RiskAssessment),
    Failed(SubmitError),
}

impl SubmissionState {
    /// Terminal states still allow a new submission; "terminal" only means
    /// the attempt that produced them is finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Success(_) | SubmissionState::Failed(_))
    }
}

/// What one `submit` call amounted to, from the caller's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Completed(RiskAssessment),
    Failed(SubmitError),
    /// A newer submission invalidated this one while its response was in
    /// flight. The response was discarded without touching view state; this
    /// is not an error.
    Superseded,
}
