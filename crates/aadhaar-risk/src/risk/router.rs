use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use super::features::FeatureSet;
use super::service::RiskService;
use super::{RiskPredictor, RiskVerdict};
use crate::analytics::router::StateFilter;
use crate::analytics::AnalyticsProvider;

/// Router builder exposing the scoring endpoints.
pub fn risk_router<P, A>(service: Arc<RiskService<P, A>>) -> Router
where
    P: RiskPredictor + 'static,
    A: AnalyticsProvider + 'static,
{
    Router::new()
        .route("/api/v1/risk/predict", post(predict_handler::<P, A>))
        .route("/api/v1/risk/batch", post(batch_handler::<P, A>))
        .route("/api/v1/risk/states", get(states_handler::<P, A>))
        .with_state(service)
}

pub(crate) async fn predict_handler<P, A>(
    State(service): State<Arc<RiskService<P, A>>>,
    Json(features): Json<FeatureSet>,
) -> Json<RiskVerdict>
where
    P: RiskPredictor + 'static,
    A: AnalyticsProvider + 'static,
{
    Json(service.predict(&features))
}

pub(crate) async fn batch_handler<P, A>(
    State(service): State<Arc<RiskService<P, A>>>,
    Json(rows): Json<Vec<FeatureSet>>,
) -> Json<Vec<RiskVerdict>>
where
    P: RiskPredictor + 'static,
    A: AnalyticsProvider + 'static,
{
    Json(service.predict_batch(&rows))
}

pub(crate) async fn states_handler<P, A>(
    State(service): State<Arc<RiskService<P, A>>>,
    Query(filter): Query<StateFilter>,
) -> Json<Vec<RiskVerdict>>
where
    P: RiskPredictor + 'static,
    A: AnalyticsProvider + 'static,
{
    Json(service.assess_states(filter.state.as_deref()))
}
