use std::sync::Arc;

use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::{
    classifier,
    error::SubmitError,
    state::{RequestToken, SubmissionOutcome, SubmissionState},
    transport::PredictionBackend,
    validator::{validate, RawInput},
};

/// Sequences validate -> send -> await -> classify -> publish for each
/// submission, and owns the single in-flight invariant: whichever submission
/// started last holds the active token, and only a response carrying the
/// active token may transition view state.
pub struct SubmissionController {
    backend: Arc<dyn PredictionBackend>,
    inner: Mutex<ControllerInner>,
    state_tx: broadcast::Sender<SubmissionState>,
}

struct ControllerInner {
    state: SubmissionState,
    active_token: Option<RequestToken>,
}

impl SubmissionController {
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        let (state_tx, _) = broadcast::channel(64);
        Self {
            backend,
            inner: Mutex::new(ControllerInner {
                state: SubmissionState::Idle,
                active_token: None,
            }),
            state_tx,
        }
    }

    pub async fn current_state(&self) -> SubmissionState {
        self.inner.lock().await.state.clone()
    }

    /// Every state replacement is broadcast. Receivers that lag simply miss
    /// intermediate values; `current_state` always has the latest.
    pub fn subscribe_state(&self) -> broadcast::Receiver<SubmissionState> {
        self.state_tx.subscribe()
    }

    /// Run one submission attempt end to end. Starting a new attempt
    /// invalidates any outstanding one immediately, so at most one terminal
    /// transition is observed per burst of submissions and it belongs to the
    /// last one started.
    pub async fn submit(&self, raw: RawInput) -> SubmissionOutcome {
        let payload = match validate(&raw) {
            Ok(payload) => payload,
            Err(fields) => {
                let error = SubmitError::Validation(fields);
                let mut inner = self.inner.lock().await;
                // A rejected submission still supersedes an in-flight one.
                inner.active_token = None;
                self.replace_state(&mut inner, SubmissionState::Failed(error.clone()));
                return SubmissionOutcome::Failed(error);
            }
        };

        let token = RequestToken::new();
        {
            let mut inner = self.inner.lock().await;
            inner.active_token = Some(token);
            self.replace_state(&mut inner, SubmissionState::Submitting(token));
        }
        info!("submit: started token={token} model={}", payload.model);

        // The only suspension point. The lock is not held across it; the
        // token comparison below is what guards the transition.
        let result = self.backend.predict(&payload.to_request()).await;

        let mut inner = self.inner.lock().await;
        if inner.active_token != Some(token) {
            debug!("submit: discarding stale response token={token}");
            return SubmissionOutcome::Superseded;
        }
        inner.active_token = None;

        match result {
            Ok(response) => {
                let assessment = classifier::classify(&response);
                info!(
                    "submit: completed token={token} tier={} confidence={:.1}%",
                    assessment.tier, assessment.confidence_percent
                );
                self.replace_state(&mut inner, SubmissionState::Success(assessment));
                SubmissionOutcome::Completed(assessment)
            }
            Err(err) => {
                let error = SubmitError::from(err);
                warn!("submit: failed token={token} error={error}");
                self.replace_state(&mut inner, SubmissionState::Failed(error.clone()));
                SubmissionOutcome::Failed(error)
            }
        }
    }

    /// Clear any terminal result back to `Idle` without resubmitting. Also
    /// invalidates the active token, so a response still in flight is
    /// discarded when it lands.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.active_token = None;
        self.replace_state(&mut inner, SubmissionState::Idle);
    }

    fn replace_state(&self, inner: &mut ControllerInner, next: SubmissionState) {
        inner.state = next.clone();
        let _ = self.state_tx.send(next);
    }
}
