use shared::{domain::RiskTier, protocol::PredictResponse};

/// Display-only result of interpreting one prediction. Recomputed for every
/// response, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    /// Always within [0, 100].
    pub confidence_percent: f64,
}

/// Map a decoded prediction onto a risk tier. Total and pure: every cluster
/// value classifies, unrecognized ones as [`RiskTier::Unknown`], and the
/// confidence percentage is clamped so an out-of-contract score is never
/// rendered outside its display bounds.
pub fn classify(result: &PredictResponse) -> RiskAssessment {
    let tier = match result.cluster {
        0 => RiskTier::Low,
        1 => RiskTier::Medium,
        2 => RiskTier::High,
        _ => RiskTier::Unknown,
    };

    RiskAssessment {
        tier,
        confidence_percent: (result.confidence * 100.0).clamp(0.0, 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(cluster: u64, confidence: f64) -> PredictResponse {
        PredictResponse {
            cluster,
            confidence,
        }
    }

    #[test]
    fn known_clusters_map_to_tiers() {
        assert_eq!(classify(&response(0, 0.5)).tier, RiskTier::Low);
        assert_eq!(classify(&response(1, 0.5)).tier, RiskTier::Medium);
        assert_eq!(classify(&response(2, 0.5)).tier, RiskTier::High);
    }

    #[test]
    fn unrecognized_cluster_is_unknown_with_scaled_confidence() {
        let assessment = classify(&response(7, 0.2));
        assert_eq!(assessment.tier, RiskTier::Unknown);
        assert_eq!(assessment.confidence_percent, 20.0);
    }

    #[test]
    fn confidence_scales_to_percent() {
        assert_eq!(classify(&response(0, 0.5)).confidence_percent, 50.0);
        assert_eq!(classify(&response(1, 1.0)).confidence_percent, 100.0);
        assert_eq!(classify(&response(1, 0.0)).confidence_percent, 0.0);
    }

    #[test]
    fn out_of_range_confidence_is_clamped() {
        assert_eq!(classify(&response(2, 1.4)).confidence_percent, 100.0);
        assert_eq!(classify(&response(2, -0.25)).confidence_percent, 0.0);
    }

    #[test]
    fn classification_is_deterministic() {
        let input = response(2, 0.87);
        assert_eq!(classify(&input), classify(&input));
    }
}
