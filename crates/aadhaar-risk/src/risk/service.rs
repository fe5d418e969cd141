use std::sync::Arc;

use tracing::{debug, warn};

use super::features::FeatureSet;
use super::{RiskPredictor, RiskVerdict};
use crate::analytics::AnalyticsProvider;

/// Service composing a predictor with the analytics provider that feeds it.
pub struct RiskService<P, A> {
    predictor: Arc<P>,
    analytics: Arc<A>,
}

impl<P, A> RiskService<P, A>
where
    P: RiskPredictor + 'static,
    A: AnalyticsProvider + 'static,
{
    pub fn new(predictor: Arc<P>, analytics: Arc<A>) -> Self {
        Self {
            predictor,
            analytics,
        }
    }

    /// Score one feature set. Out-of-range rates are logged and scored unchanged.
    pub fn predict(&self, features: &FeatureSet) -> RiskVerdict {
        let out_of_range = features.out_of_range_rates();
        if !out_of_range.is_empty() {
            warn!(
                state = %features.state,
                fields = ?out_of_range,
                "rates outside [0, 1]; scoring without correction"
            );
        }

        let verdict = self.predictor.predict(features);
        debug!(
            state = %verdict.state,
            prediction = verdict.prediction.label(),
            score = verdict.score,
            confidence = verdict.confidence,
            "risk verdict computed"
        );
        verdict
    }

    pub fn predict_batch(&self, rows: &[FeatureSet]) -> Vec<RiskVerdict> {
        rows.iter().map(|row| self.predict(row)).collect()
    }

    /// Score the provider's per-state aggregates, optionally narrowed to one state.
    pub fn assess_states(&self, state: Option<&str>) -> Vec<RiskVerdict> {
        self.analytics
            .aggregated_stats_by_state(state)
            .iter()
            .map(|stats| self.predict(&stats.to_features()))
            .collect()
    }
}
