use aadhaar_risk::analytics::StubAnalytics;
use aadhaar_risk::config::AnalyticsConfig;
use aadhaar_risk::risk::{RiskService, RuleBasedPredictor};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type DefaultRiskService = RiskService<RuleBasedPredictor, StubAnalytics>;

/// Wire the rule-based predictor to the stub analytics provider; both are shared with the routers.
pub(crate) fn build_risk_components(
    config: &AnalyticsConfig,
) -> (Arc<DefaultRiskService>, Arc<StubAnalytics>) {
    let analytics = Arc::new(StubAnalytics::new(config.data_dir.clone()));
    let service = Arc::new(RiskService::new(
        Arc::new(RuleBasedPredictor),
        analytics.clone(),
    ));
    (service, analytics)
}
