use serde::{Deserialize, Serialize};

const HIGH_RISK_THRESHOLD: f64 = 0.70;
const MEDIUM_RISK_THRESHOLD: f64 = 0.40;
const CONFIDENCE_FLOOR: f64 = 0.65;
const CONFIDENCE_CEILING: f64 = 0.95;

/// Risk zone a normalized score falls into. Serializes as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskBand {
    #[serde(rename = "Low Risk Zone")]
    Low,
    #[serde(rename = "Medium Risk Zone")]
    Medium,
    #[serde(rename = "High Risk Zone")]
    High,
}

impl RiskBand {
    /// Half-open banding: `[0.70, ..)` is high, `[0.40, 0.70)` medium, the rest low.
    pub fn classify(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskBand::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low Risk Zone",
            RiskBand::Medium => "Medium Risk Zone",
            RiskBand::High => "High Risk Zone",
        }
    }

    /// Advisory text downstream consumers match on verbatim.
    pub fn recommended_action(&self) -> &'static str {
        match self {
            RiskBand::Low => "Routine monitoring sufficient. No immediate action required.",
            RiskBand::Medium => {
                "Schedule verification within 7 days. Focus on address and biometric quality checks."
            }
            RiskBand::High => {
                "Immediate verification required. Initiate PIN validation and duplicate check workflows."
            }
        }
    }

    /// Unrounded confidence for a score inside this band, clamped to [0.65, 0.95].
    pub fn confidence(&self, score: f64) -> f64 {
        let raw = match self {
            RiskBand::High => 0.85 + (score - HIGH_RISK_THRESHOLD) * 0.3,
            RiskBand::Medium => 0.75 + (score - MEDIUM_RISK_THRESHOLD) * 0.2,
            RiskBand::Low => 0.70 + score * 0.3,
        };
        raw.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
    }
}
