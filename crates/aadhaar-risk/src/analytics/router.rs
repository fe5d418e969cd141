use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use super::domain::{AnomalyReport, CorrelationWarning, DistributionStats, StateStats};
use super::AnalyticsProvider;

#[derive(Debug, Default, Deserialize)]
pub struct StateFilter {
    pub state: Option<String>,
}

/// Router exposing the analytics contract over HTTP.
pub fn analytics_router<A>(provider: Arc<A>) -> Router
where
    A: AnalyticsProvider + 'static,
{
    Router::new()
        .route("/api/v1/analytics/states", get(states_handler::<A>))
        .route("/api/v1/analytics/anomalies", post(anomalies_handler::<A>))
        .route(
            "/api/v1/analytics/correlations",
            post(correlations_handler::<A>),
        )
        .route(
            "/api/v1/analytics/distributions",
            post(distributions_handler::<A>),
        )
        .with_state(provider)
}

pub(crate) async fn states_handler<A>(
    State(provider): State<Arc<A>>,
    Query(filter): Query<StateFilter>,
) -> Json<Vec<StateStats>>
where
    A: AnalyticsProvider + 'static,
{
    Json(provider.aggregated_stats_by_state(filter.state.as_deref()))
}

pub(crate) async fn anomalies_handler<A>(
    State(provider): State<Arc<A>>,
    Json(data): Json<Value>,
) -> Json<AnomalyReport>
where
    A: AnalyticsProvider + 'static,
{
    Json(provider.detect_anomalies(&data))
}

pub(crate) async fn correlations_handler<A>(
    State(provider): State<Arc<A>>,
    Json(data): Json<Value>,
) -> Json<Vec<CorrelationWarning>>
where
    A: AnalyticsProvider + 'static,
{
    Json(provider.calculate_correlation_warnings(&data))
}

pub(crate) async fn distributions_handler<A>(
    State(provider): State<Arc<A>>,
    Json(data): Json<Value>,
) -> Json<DistributionStats>
where
    A: AnalyticsProvider + 'static,
{
    Json(provider.distribution_stats(&data))
}
