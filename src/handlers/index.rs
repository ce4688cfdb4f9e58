//! Input form handler

use axum::{extract::State, response::Html};

use crate::page;
use crate::AppState;

/// Render the empty input form
pub async fn form(State(state): State<AppState>) -> Html<String> {
    Html(page::render(state.predictor.feature_names(), None))
}
