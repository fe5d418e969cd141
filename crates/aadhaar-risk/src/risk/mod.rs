//! Rule-based risk scoring for identity-record batch statistics.
//!
//! A [`FeatureSet`] is reduced to a weighted, normalized score in [0, 1], banded into a
//! [`RiskBand`], and explained by up to three ranked [`FeatureContribution`]s. The
//! [`RiskPredictor`] trait is the seam where a trained model would replace the
//! [`RuleBasedPredictor`].

pub mod batch;
mod features;
mod policy;
pub mod router;
mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{score_batch, BatchImportError, BatchImporter};
pub use features::{FeatureError, FeatureSet};
pub use policy::RiskBand;
pub use router::risk_router;
pub use service::RiskService;

use rules::{normalized_score, rank_contributions, round_to, ScoreSignals};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifies which strategy produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    RuleBased,
}

/// One explained driver of the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: String,
    pub value: String,
    pub contribution: f64,
}

impl FeatureContribution {
    /// Placeholder reported when no rate clears its significance threshold.
    pub fn general_assessment() -> Self {
        Self {
            feature: "General Assessment".to_string(),
            value: "Normal".to_string(),
            contribution: 100.0,
        }
    }
}

/// Scoring output; field names are part of the HTTP contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub prediction: RiskBand,
    pub score: f64,
    pub confidence: f64,
    pub recommended_action: String,
    pub top_features: Vec<FeatureContribution>,
    pub state: String,
    pub model_type: ModelType,
}

/// Strategy turning batch statistics into a verdict.
pub trait RiskPredictor: Send + Sync {
    fn model_type(&self) -> ModelType;
    fn predict(&self, features: &FeatureSet) -> RiskVerdict;
}

/// Weighted-feature fallback used while no trained model is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedPredictor;

impl RiskPredictor for RuleBasedPredictor {
    fn model_type(&self) -> ModelType {
        ModelType::RuleBased
    }

    fn predict(&self, features: &FeatureSet) -> RiskVerdict {
        let signals = ScoreSignals::from_features(features);
        let score = normalized_score(&signals);
        let band = RiskBand::classify(score);
        let confidence = band.confidence(score);

        RiskVerdict {
            prediction: band,
            score: round_to(score, 2),
            confidence: round_to(confidence, 2),
            recommended_action: band.recommended_action().to_string(),
            top_features: rank_contributions(&signals),
            state: features.state.clone(),
            model_type: self.model_type(),
        }
    }
}

/// Score a feature set with the rule-based predictor.
pub fn score(features: &FeatureSet) -> RiskVerdict {
    RuleBasedPredictor.predict(features)
}

/// Mapping-in, mapping-out entry point for loosely-typed callers.
pub fn get_prediction(features: &Value) -> Result<Value, FeatureError> {
    let features = FeatureSet::from_value(features)?;
    Ok(serde_json::to_value(score(&features))?)
}
