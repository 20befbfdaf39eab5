use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of model identifiers the prediction endpoint accepts.
/// Wire names are exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    #[serde(rename = "logreg")]
    LogReg,
    #[serde(rename = "randforest")]
    RandForest,
    #[serde(rename = "gradboost")]
    GradBoost,
    #[serde(rename = "svm_rbf")]
    SvmRbf,
    #[serde(rename = "mlp")]
    Mlp,
}

impl ModelKind {
    pub const ALL: [ModelKind; 5] = [
        ModelKind::LogReg,
        ModelKind::RandForest,
        ModelKind::GradBoost,
        ModelKind::SvmRbf,
        ModelKind::Mlp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::LogReg => "logreg",
            ModelKind::RandForest => "randforest",
            ModelKind::GradBoost => "gradboost",
            ModelKind::SvmRbf => "svm_rbf",
            ModelKind::Mlp => "mlp",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown model '{input}', expected one of: logreg, randforest, gradboost, svm_rbf, mlp")]
pub struct UnknownModelError {
    pub input: String,
}

impl FromStr for ModelKind {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logreg" => Ok(ModelKind::LogReg),
            "randforest" => Ok(ModelKind::RandForest),
            "gradboost" => Ok(ModelKind::GradBoost),
            "svm_rbf" => Ok(ModelKind::SvmRbf),
            "mlp" => Ok(ModelKind::Mlp),
            other => Err(UnknownModelError {
                input: other.to_string(),
            }),
        }
    }
}

/// Human-facing risk classification derived from a cluster identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Unknown,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
            RiskTier::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_names_round_trip_through_from_str() {
        for model in ModelKind::ALL {
            assert_eq!(model.as_str().parse::<ModelKind>(), Ok(model));
        }
    }

    #[test]
    fn model_parse_is_case_sensitive() {
        assert!("LogReg".parse::<ModelKind>().is_err());
        assert!("LOGREG".parse::<ModelKind>().is_err());
        assert!("Svm_Rbf".parse::<ModelKind>().is_err());
    }

    #[test]
    fn model_serializes_to_wire_name() {
        let json = serde_json::to_string(&ModelKind::SvmRbf).expect("serialize");
        assert_eq!(json, "\"svm_rbf\"");
    }
}
