use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use super::domain::{AnomalyReport, CorrelationWarning, DistributionStats, StateStats};
use super::AnalyticsProvider;

/// Placeholder provider: no source data is read and every query comes back empty.
#[derive(Debug, Clone, Default)]
pub struct StubAnalytics {
    data_dir: Option<PathBuf>,
}

impl StubAnalytics {
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> Option<&PathBuf> {
        self.data_dir.as_ref()
    }
}

impl AnalyticsProvider for StubAnalytics {
    fn aggregated_stats_by_state(&self, state: Option<&str>) -> Vec<StateStats> {
        debug!(?state, data_dir = ?self.data_dir, "stub analytics has no aggregates");
        Vec::new()
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
