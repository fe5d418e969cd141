//! Contract for the analytics component expected to supply real feature values.
//!
//! Only [`StubAnalytics`] exists today; it returns the empty shapes below so callers
//! and HTTP consumers can be built against the final structure.

pub mod domain;
pub mod router;
mod stub;

pub use domain::{AnomalyReport, CorrelationWarning, DistributionStats, StateStats};
pub use router::analytics_router;
pub use stub::StubAnalytics;

use serde_json::Value;

/// Source of aggregate statistics and data-quality findings.
pub trait AnalyticsProvider: Send + Sync {
    fn aggregated_stats_by_state(&self, state: Option<&str>) -> Vec<StateStats>;
    fn detect_anomalies(&self, data: &Value) -> AnomalyReport;
    fn calculate_correlation_warnings(&self, data: &Value) -> Vec<CorrelationWarning>;
    fn distribution_stats(&self, data: &Value) -> DistributionStats;
}
