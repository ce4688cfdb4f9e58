//! Fraud Predictor Server
//!
//! Loads the model bundle once at startup and serves the prediction form.
//! A missing or broken bundle does not stop the server; every prediction
//! then reports the load error instead.

use anyhow::Context;
use fraud_predictor::{create_router, init_tracing, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing::info!("Fraud Predictor starting...");
    tracing::info!("Model bundle: {}", config.model_path.display());

    // Build application state
    let state = AppState::from_config(config.clone());
    if let Some(err) = state.predictor.load_error() {
        tracing::warn!("Serving without a model: {}", err);
    }

    // Build router
    let app = create_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
