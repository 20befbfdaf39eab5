pub mod classifier;
pub mod controller;
pub mod error;
pub mod state;
pub mod transport;
pub mod validator;

pub use classifier::{classify, RiskAssessment};
pub use controller::SubmissionController;
pub use error::{PredictError, SubmitError};
pub use state::{RequestToken, SubmissionOutcome, SubmissionState};
pub use transport::{HttpPredictionBackend, PredictionBackend};
pub use validator::{validate, RawInput, ValidatedPayload};

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod controller_tests;
