//! Offline trainer
//!
//! Reads the dataset at `DATASET_PATH`, fits the decision tree and writes the
//! model bundle to `MODEL_PATH`. Any failure aborts with a non-zero exit.

use anyhow::Context;
use fraud_predictor::{init_tracing, trainer, Config};

fn main() -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let bundle = trainer::run(&config.dataset_path, &config.model_path)
        .context("training failed")?;

    tracing::info!(
        "Model and feature names {:?} saved successfully as '{}'",
        bundle.feature_names,
        config.model_path.display()
    );
    Ok(())
}
