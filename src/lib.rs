//! Fraud Predictor
//!
//! Serves credit-card fraud verdicts from a pre-trained decision tree and
//! ships the offline trainer that produces that tree.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐         ┌──────────────────────────────┐
//! │  train (offline, once)   │         │  fraud-predictor (server)    │
//! │                          │         │                              │
//! │  creditcard.csv          │         │  startup: Predictor::load    │
//! │    └─▶ split 70/30       │  bundle │    ├─ Ready  (tree + schema) │
//! │         └─▶ DecisionTree ├────────▶│    └─ Failed (message)       │
//! │              (entropy)   │  file   │                              │
//! │                          │         │  GET  /         form page    │
//! │                          │         │  POST /predict  verdict      │
//! │                          │         │  GET  /health   status JSON  │
//! └──────────────────────────┘         └──────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod features;
pub mod handlers;
pub mod models;
pub mod page;
pub mod predictor;
pub mod trainer;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use error::{InferenceError, LoadError, PredictError, TrainError};
pub use features::MissingFeature;
pub use models::{Classifier, ModelBundle, Verdict};
pub use predictor::Predictor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
    pub config: Config,
}

impl AppState {
    /// Load the model named by `config` and wrap it for the handlers
    pub fn from_config(config: Config) -> Self {
        let missing = if config.strict_features {
            MissingFeature::Reject
        } else {
            MissingFeature::Zero
        };
        let predictor = Predictor::load(&config.model_path).with_missing_feature(missing);

        Self {
            predictor: Arc::new(predictor),
            config,
        }
    }
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::form))
        .route("/predict", post(handlers::predict::predict))
        .route("/health", get(handlers::health::check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fraud_predictor=debug,train=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
