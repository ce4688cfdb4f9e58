//! Classifier capability shared by the predictor and the trained model

use linfa::prelude::Predict;
use linfa_trees::DecisionTree;
use ndarray::{Array1, Array2};

use crate::error::InferenceError;

/// Reject NaN and infinite inputs; trees would route them down an arbitrary
/// branch instead of failing.
pub fn ensure_finite(features: &[f64]) -> Result<(), InferenceError> {
    match features.iter().position(|v| !v.is_finite()) {
        Some(idx) => Err(InferenceError(format!(
            "input contains NaN or infinity at position {} ({})",
            idx, features[idx]
        ))),
        None => Ok(()),
    }
}

/// Anything that maps an ordered feature vector to a class label
pub trait Classifier: Send + Sync {
    fn predict_label(&self, features: &[f64]) -> Result<usize, InferenceError>;
}

impl Classifier for DecisionTree<f64, usize> {
    fn predict_label(&self, features: &[f64]) -> Result<usize, InferenceError> {
        if features.is_empty() {
            return Err(InferenceError("feature vector is empty".to_string()));
        }
        ensure_finite(features)?;

        // One row, one column per feature
        let record = Array2::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| InferenceError(format!("invalid feature shape: {}", e)))?;

        let labels: Array1<usize> = self.predict(&record);
        labels
            .first()
            .copied()
            .ok_or_else(|| InferenceError("classifier returned no label".to_string()))
    }
}
