use shared::error::FieldError;
use thiserror::Error;

/// Failure modes of a prediction backend. Validation failures never reach
/// the backend, so they have no variant here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredictError {
    /// Network unreachable, connection reset, timeout, or non-2xx status.
    #[error("prediction request failed: {0}")]
    Transport(String),
    /// Response body does not match the expected shape.
    #[error("prediction response malformed: {0}")]
    Decode(String),
}

/// User-visible failure of one submission attempt. Every variant terminates
/// in `SubmissionState::Failed`; nothing propagates past the controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("validation failed: {}", field_list(.0))]
    Validation(Vec<FieldError>),
    #[error("prediction request failed: {0}")]
    Transport(String),
    #[error("prediction response malformed: {0}")]
    Decode(String),
}

impl From<PredictError> for SubmitError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Transport(message) => SubmitError::Transport(message),
            PredictError::Decode(message) => SubmitError::Decode(message),
        }
    }
}

fn field_list(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::FieldId;

    #[test]
    fn validation_error_names_every_field() {
        let error = SubmitError::Validation(vec![
            FieldError::new(FieldId::Bet, "required"),
            FieldError::new(FieldId::ModelName, "unknown model"),
        ]);
        let rendered = error.to_string();
        assert!(rendered.contains("bet: required"));
        assert!(rendered.contains("model_name: unknown model"));
    }

    #[test]
    fn backend_errors_map_onto_submit_errors() {
        assert_eq!(
            SubmitError::from(PredictError::Transport("connection reset".into())),
            SubmitError::Transport("connection reset".into())
        );
        assert_eq!(
            SubmitError::from(PredictError::Decode("missing field".into())),
            SubmitError::Decode("missing field".into())
        );
    }
}
