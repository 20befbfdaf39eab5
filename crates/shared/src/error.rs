use std::fmt;

use serde::{Deserialize, Serialize};

/// The six user-entered fields, named as the capture surface knows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Bet,
    TotalGames,
    TotalProfit,
    TotalLosses,
    CashedOut,
    ModelName,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Bet => "bet",
            FieldId::TotalGames => "total_games",
            FieldId::TotalProfit => "total_profit",
            FieldId::TotalLosses => "total_losses",
            FieldId::CashedOut => "cashed_out",
            FieldId::ModelName => "model_name",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field that failed validation, with a short message a front end can
/// render next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
