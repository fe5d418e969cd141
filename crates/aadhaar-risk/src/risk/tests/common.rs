use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::analytics::{
    AnalyticsProvider, AnomalyReport, CorrelationWarning, DistributionStats, StateStats,
    StubAnalytics,
};
use crate::risk::{FeatureSet, RiskService, RuleBasedPredictor};

pub(super) fn features(
    records: u64,
    anomalies: u64,
    invalid_pin_rate: f64,
    duplicate_rate: f64,
    missing_dob_rate: f64,
) -> FeatureSet {
    FeatureSet {
        records,
        anomalies,
        invalid_pin_rate,
        duplicate_rate,
        missing_dob_rate,
        ..FeatureSet::default()
    }
}

pub(super) fn bihar_features() -> FeatureSet {
    FeatureSet {
        state: "Bihar".to_string(),
        ..features(200, 30, 0.2, 0.12, 0.08)
    }
}

pub(super) fn stub_service() -> RiskService<RuleBasedPredictor, StubAnalytics> {
    RiskService::new(
        Arc::new(RuleBasedPredictor),
        Arc::new(StubAnalytics::default()),
    )
}

pub(super) fn seeded_service() -> (
    RiskService<RuleBasedPredictor, SeededAnalytics>,
    Arc<SeededAnalytics>,
) {
    let analytics = Arc::new(SeededAnalytics::new(vec![
        StateStats {
            state: "Bihar".to_string(),
            records: 200,
            anomalies: 30,
            invalid_pin_rate: 0.2,
            duplicate_rate: 0.12,
            missing_dob_rate: 0.08,
        },
        StateStats {
            state: "Kerala".to_string(),
            records: 1000,
            anomalies: 0,
            invalid_pin_rate: 0.0,
            duplicate_rate: 0.0,
            missing_dob_rate: 0.0,
        },
    ]));
    let service = RiskService::new(Arc::new(RuleBasedPredictor), analytics.clone());
    (service, analytics)
}

/// Analytics double serving fixed aggregates and recording state filters.
pub(super) struct SeededAnalytics {
    stats: Vec<StateStats>,
    queries: Mutex<Vec<Option<String>>>,
}

impl SeededAnalytics {
    fn new(stats: Vec<StateStats>) -> Self {
        Self {
            stats,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn queries(&self) -> Vec<Option<String>> {
        self.queries.lock().expect("query mutex poisoned").clone()
    }
}

impl AnalyticsProvider for SeededAnalytics {
    fn aggregated_stats_by_state(&self, state: Option<&str>) -> Vec<StateStats> {
        self.queries
            .lock()
            .expect("query mutex poisoned")
            .push(state.map(str::to_string));
        self.stats
            .iter()
            .filter(|stats| state.map_or(true, |wanted| stats.state == wanted))
            .cloned()
            .collect()
    }

    fn detect_anomalies(&self, _data: &Value) -> AnomalyReport {
        AnomalyReport::default()
    }

    fn calculate_correlation_warnings(&self, _data: &Value) -> Vec<CorrelationWarning> {
        Vec::new()
    }

    fn distribution_stats(&self, _data: &Value) -> DistributionStats {
        DistributionStats::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
