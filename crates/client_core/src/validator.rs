use shared::{
    domain::ModelKind,
    error::{FieldError, FieldId},
    protocol::PredictRequest,
};

/// Snapshot of the six user-entered fields exactly as typed. Taken once,
/// atomically, when a submission begins; edits after that point belong to the
/// next submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub bet: String,
    pub total_games: String,
    pub total_profit: String,
    pub total_losses: String,
    pub cashed_out: String,
    pub model_name: String,
}

/// The coerced, typed form of a [`RawInput`]. Construction is all-or-nothing:
/// only [`validate`] builds one, and only when every field rule passes.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPayload {
    pub bet: f64,
    pub total_games: u64,
    pub total_profit: f64,
    pub total_losses: f64,
    pub cashed_out: f64,
    pub model: ModelKind,
}

impl ValidatedPayload {
    pub fn to_request(&self) -> PredictRequest {
        PredictRequest {
            bet: self.bet,
            total_games: self.total_games,
            total_profit: self.total_profit,
            total_losses: self.total_losses,
            cashed_out: self.cashed_out,
            model_name: self.model,
        }
    }
}

/// Validate a raw input snapshot. Field rules apply independently; the error
/// vector lists every failing field exactly once, in declaration order, so a
/// caller can surface all problems at once. There are deliberately no
/// cross-field rules.
pub fn validate(raw: &RawInput) -> Result<ValidatedPayload, Vec<FieldError>> {
    let mut errors = Vec::new();

    let bet = parse_real(FieldId::Bet, &raw.bet, &mut errors);
    let total_games = parse_count(FieldId::TotalGames, &raw.total_games, &mut errors);
    let total_profit = parse_real(FieldId::TotalProfit, &raw.total_profit, &mut errors);
    let total_losses = parse_real(FieldId::TotalLosses, &raw.total_losses, &mut errors);
    let cashed_out = parse_real(FieldId::CashedOut, &raw.cashed_out, &mut errors);
    let model = parse_model(&raw.model_name, &mut errors);

    match (bet, total_games, total_profit, total_losses, cashed_out, model) {
        (Some(bet), Some(total_games), Some(total_profit), Some(total_losses), Some(cashed_out), Some(model))
            if errors.is_empty() =>
        {
            Ok(ValidatedPayload {
                bet,
                total_games,
                total_profit,
                total_losses,
                cashed_out,
                model,
            })
        }
        _ => Err(errors),
    }
}

fn parse_real(field: FieldId, text: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        errors.push(FieldError::new(field, "required"));
        return None;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(_) => {
            errors.push(FieldError::new(field, "must be a finite number"));
            None
        }
        Err(_) => {
            errors.push(FieldError::new(field, "must be a number"));
            None
        }
    }
}

fn parse_count(field: FieldId, text: &str, errors: &mut Vec<FieldError>) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() {
        errors.push(FieldError::new(field, "required"));
        return None;
    }
    match text.parse::<u64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(FieldError::new(field, "must be a non-negative whole number"));
            None
        }
    }
}

fn parse_model(text: &str, errors: &mut Vec<FieldError>) -> Option<ModelKind> {
    // Exact, case-sensitive match against the closed identifier set.
    match text.parse::<ModelKind>() {
        Ok(model) => Some(model),
        Err(err) => {
            errors.push(FieldError::new(FieldId::ModelName, err.to_string()));
            None
        }
    }
}
