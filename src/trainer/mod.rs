//! Trainer - fit the fraud classifier offline and write the model bundle
//!
//! Linear, one-shot pipeline:
//!
//! ```text
//!   creditcard.csv ─▶ TrainingData ─▶ 70/30 split (seed 42)
//!                                          │
//!                                          ▼
//!             bundle file ◀── ModelBundle ◀── DecisionTree (entropy)
//! ```

pub mod dataset;
pub mod split;

use linfa::prelude::*;
use linfa_trees::{DecisionTree, SplitQuality};
use std::path::Path;

use crate::error::TrainError;
use crate::models::ModelBundle;

pub use dataset::TrainingData;
pub use split::train_test_split;

/// Columns fed to the classifier, in vector order
pub const FEATURE_COLUMNS: [&str; 6] = ["V1", "V2", "V3", "V4", "V5", "Amount"];

/// Binary target column (1 = fraud)
pub const LABEL_COLUMN: &str = "Class";

/// Share of rows held out from fitting
pub const TEST_RATIO: f64 = 0.30;

/// Fixed seed so repeated runs split identically
pub const SPLIT_SEED: u64 = 42;

/// Fit a single unpruned decision tree using information gain
pub fn fit_decision_tree(train: &TrainingData) -> Result<DecisionTree<f64, usize>, TrainError> {
    if train.is_empty() {
        return Err(TrainError::EmptyDataset);
    }

    let dataset = Dataset::new(train.records.clone(), train.labels.clone());

    DecisionTree::params()
        .split_quality(SplitQuality::Entropy)
        .max_depth(None)
        .fit(&dataset)
        .map_err(|e| TrainError::Fit(e.to_string()))
}

/// Read the dataset, fit, and write the bundle to `model_path`
pub fn run(dataset_path: &Path, model_path: &Path) -> Result<ModelBundle, TrainError> {
    tracing::info!(path = %dataset_path.display(), "Reading dataset");
    let data = TrainingData::from_csv_path(dataset_path, &FEATURE_COLUMNS, LABEL_COLUMN)?;
    tracing::info!(
        rows = data.len(),
        fraud = data.count_label(1),
        legit = data.count_label(0),
        "Dataset loaded"
    );

    let (train, test) = train_test_split(&data, TEST_RATIO, SPLIT_SEED);
    tracing::info!(train = train.len(), test = test.len(), seed = SPLIT_SEED, "Dataset split");

    let model = fit_decision_tree(&train)?;
    tracing::debug!(features_used = ?model.features(), "Decision tree fitted");

    let bundle = ModelBundle::new(model, data.feature_names);
    bundle.save(model_path)?;
    tracing::info!(path = %model_path.display(), "Model and feature names saved");

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classifier;
    use std::fmt::Write as _;
    use tempfile::tempdir;

    /// Fraud rows have a large Amount, everything else is small
    fn synthetic_csv(rows: usize) -> String {
        let mut csv = String::from("\"Time\",\"V1\",\"V2\",\"V3\",\"V4\",\"V5\",\"Amount\",\"Class\"\n");
        for i in 0..rows {
            let fraud = i % 5 == 0;
            let amount = if fraud { 900.0 + i as f64 } else { 10.0 + (i % 17) as f64 };
            let v = (i % 7) as f64 - 3.0;
            writeln!(
                csv,
                "{},{},{},{},{},{},{},\"{}\"",
                i,
                v,
                -v,
                v * 0.5,
                v * 0.25,
                1.0,
                amount,
                if fraud { 1 } else { 0 }
            )
            .unwrap();
        }
        csv
    }

    #[test]
    fn test_run_writes_bundle_with_feature_order() {
        let dir = tempdir().unwrap();
        let dataset_path = dir.path().join("creditcard.csv");
        let model_path = dir.path().join("model.bin");
        std::fs::write(&dataset_path, synthetic_csv(150)).unwrap();

        run(&dataset_path, &model_path).unwrap();

        let bundle = ModelBundle::load(&model_path).unwrap();
        assert_eq!(bundle.feature_names, FEATURE_COLUMNS.to_vec());
        assert_eq!(bundle.model.predict_label(&[0.0, 0.0, 0.0, 0.0, 1.0, 5000.0]).unwrap(), 1);
        assert_eq!(bundle.model.predict_label(&[0.0, 0.0, 0.0, 0.0, 1.0, 12.0]).unwrap(), 0);
    }

    #[test]
    fn test_run_missing_dataset() {
        let dir = tempdir().unwrap();
        let err = run(&dir.path().join("absent.csv"), &dir.path().join("model.bin")).unwrap_err();
        assert!(matches!(err, TrainError::DatasetNotFound(_)));
        assert!(!dir.path().join("model.bin").exists());
    }

    #[test]
    fn test_fit_empty_is_error() {
        let data = TrainingData {
            feature_names: vec!["a".to_string()],
            records: ndarray::Array2::zeros((0, 1)),
            labels: ndarray::Array1::zeros(0),
        };
        assert!(matches!(fit_decision_tree(&data), Err(TrainError::EmptyDataset)));
    }
}
