//! Predictor - load-once model state and per-request inference
//!
//! The bundle is read exactly once at startup. Whatever happens there decides
//! the state for the rest of the process:
//!
//! ```text
//!   load(path) ──ok──▶ Ready { classifier, feature_names }
//!        │
//!        └──err──▶ Failed { message }   (every predict echoes message)
//! ```
//!
//! Nothing mutates the state afterwards, so it is shared across request
//! handlers behind an `Arc` without locking.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::PredictError;
use crate::features::{build_vector, MissingFeature};
use crate::models::{ensure_finite, Classifier, ModelBundle, Verdict};

/// Prefix for every load-time failure shown to users
const LOAD_ERROR_PREFIX: &str = "Error loading model";

enum ModelState {
    Ready {
        classifier: Arc<dyn Classifier>,
        feature_names: Vec<String>,
    },
    Failed {
        message: String,
    },
}

pub struct Predictor {
    state: ModelState,
    missing: MissingFeature,
}

impl Predictor {
    /// Load the bundle at `path`. Never fails; a bad bundle yields a
    /// predictor in the failed state.
    pub fn load(path: &Path) -> Self {
        match ModelBundle::load(path) {
            Ok(bundle) => {
                tracing::info!(
                    path = %path.display(),
                    features = ?bundle.feature_names,
                    "Model loaded"
                );
                Self::ready(bundle.model, bundle.feature_names)
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load model");
                Self::failed(format!("{}: {}", LOAD_ERROR_PREFIX, e))
            }
        }
    }

    pub fn ready(classifier: impl Classifier + 'static, feature_names: Vec<String>) -> Self {
        Self {
            state: ModelState::Ready {
                classifier: Arc::new(classifier),
                feature_names,
            },
            missing: MissingFeature::default(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            state: ModelState::Failed {
                message: message.into(),
            },
            missing: MissingFeature::default(),
        }
    }

    /// Choose how absent form fields are handled
    pub fn with_missing_feature(mut self, missing: MissingFeature) -> Self {
        self.missing = missing;
        self
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ModelState::Ready { .. })
    }

    /// Expected input schema; empty when the model failed to load
    pub fn feature_names(&self) -> &[String] {
        match &self.state {
            ModelState::Ready { feature_names, .. } => feature_names,
            ModelState::Failed { .. } => &[],
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            ModelState::Ready { .. } => None,
            ModelState::Failed { message } => Some(message),
        }
    }

    /// Classify one submitted transaction
    pub fn predict(&self, fields: &HashMap<String, String>) -> Result<Verdict, PredictError> {
        let (classifier, feature_names) = match &self.state {
            ModelState::Ready {
                classifier,
                feature_names,
            } => (classifier, feature_names),
            ModelState::Failed { message } => {
                return Err(PredictError::ModelUnavailable(message.clone()));
            }
        };

        let vector = build_vector(feature_names, fields, self.missing)?;
        ensure_finite(&vector)?;
        let label = classifier.predict_label(&vector)?;
        Ok(Verdict::from_label(label))
    }
}
