use serde::{Deserialize, Serialize};

use crate::domain::ModelKind;

/// Request body for `POST {API_BASE}/predict`. Field casing follows the
/// endpoint contract, not Rust convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "Bet")]
    pub bet: f64,
    #[serde(rename = "TotalGames")]
    pub total_games: u64,
    #[serde(rename = "TotalProfit")]
    pub total_profit: f64,
    #[serde(rename = "TotalLosses")]
    pub total_losses: f64,
    #[serde(rename = "CashedOut")]
    pub cashed_out: f64,
    pub model_name: ModelKind,
}

/// Successful response body from `/predict`. Typed decoding is the shape
/// check: a negative or fractional `cluster`, a non-numeric `confidence`, or
/// a missing field fails to deserialize and is reported as a decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub cluster: u64,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_contract_field_names() {
        let request = PredictRequest {
            bet: 2.5,
            total_games: 120,
            total_profit: 310.0,
            total_losses: -42.5,
            cashed_out: 180.0,
            model_name: ModelKind::GradBoost,
        };

        let value = serde_json::to_value(&request).expect("serialize");
        assert_eq!(value["Bet"], 2.5);
        assert_eq!(value["TotalGames"], 120);
        assert_eq!(value["TotalProfit"], 310.0);
        assert_eq!(value["TotalLosses"], -42.5);
        assert_eq!(value["CashedOut"], 180.0);
        assert_eq!(value["model_name"], "gradboost");
    }

    #[test]
    fn response_rejects_non_integer_cluster() {
        assert!(serde_json::from_str::<PredictResponse>(r#"{"cluster": "high", "confidence": 0.5}"#).is_err());
        assert!(serde_json::from_str::<PredictResponse>(r#"{"cluster": -1, "confidence": 0.5}"#).is_err());
        assert!(serde_json::from_str::<PredictResponse>(r#"{"cluster": 1.5, "confidence": 0.5}"#).is_err());
    }

    #[test]
    fn response_rejects_missing_fields() {
        assert!(serde_json::from_str::<PredictResponse>(r#"{"cluster": 1}"#).is_err());
        assert!(serde_json::from_str::<PredictResponse>(r#"{"confidence": 0.9}"#).is_err());
    }

    #[test]
    fn response_decodes_valid_body() {
        let decoded: PredictResponse =
            serde_json::from_str(r#"{"cluster": 2, "confidence": 0.87}"#).expect("decode");
        assert_eq!(decoded.cluster, 2);
        assert!((decoded.confidence - 0.87).abs() < f64::EPSILON);
    }
}
