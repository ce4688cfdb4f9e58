//! Prediction handler

use axum::{extract::State, response::Html, Form};
use std::collections::HashMap;

use crate::error::PredictError;
use crate::models::Verdict;
use crate::page;
use crate::AppState;

/// Classify the submitted form and render the verdict (or error) inline.
///
/// Always answers with the page; request-level failures never surface as an
/// HTTP error status.
pub async fn predict(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Html<String> {
    let result = state.predictor.predict(&fields);

    match &result {
        Ok(verdict) => tracing::debug!(verdict = %verdict, "Prediction served"),
        Err(PredictError::ModelUnavailable(_)) => {
            tracing::warn!("Prediction requested but no model is loaded")
        }
        Err(e) => tracing::debug!(error = %e, "Prediction failed"),
    }

    let text = prediction_text(&result);
    Html(page::render(state.predictor.feature_names(), Some(&text)))
}

/// User-facing line for a prediction outcome
pub fn prediction_text(result: &Result<Verdict, PredictError>) -> String {
    match result {
        Ok(verdict) => format!("This transaction is {}", verdict),
        Err(PredictError::ModelUnavailable(message)) => message.clone(),
        Err(e) => format!("Error during prediction: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InferenceError;

    #[test]
    fn test_prediction_text() {
        assert_eq!(
            prediction_text(&Ok(Verdict::Fraudulent)),
            "This transaction is Fraudulent"
        );
        assert_eq!(
            prediction_text(&Ok(Verdict::NotFraudulent)),
            "This transaction is Not Fraudulent"
        );
        assert_eq!(
            prediction_text(&Err(PredictError::ModelUnavailable(
                "Error loading model: gone".to_string()
            ))),
            "Error loading model: gone"
        );
        assert_eq!(
            prediction_text(&Err(InferenceError("boom".to_string()).into())),
            "Error during prediction: boom"
        );
    }
}
