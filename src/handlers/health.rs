//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    feature_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    strict_features: bool,
    version: &'static str,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let predictor = &state.predictor;
    Json(HealthResponse {
        status: if predictor.is_ready() { "healthy" } else { "degraded" },
        model_loaded: predictor.is_ready(),
        feature_count: predictor.feature_names().len(),
        error: predictor.load_error().map(str::to_string),
        strict_features: state.config.strict_features,
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
