//! Error handling

use std::path::PathBuf;
use thiserror::Error;

/// Why the model bundle could not be brought into memory at startup
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Model file not found at: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid model structure in bundle file: {0}")]
    Malformed(String),
}

impl From<bincode::Error> for LoadError {
    fn from(err: bincode::Error) -> Self {
        LoadError::Malformed(err.to_string())
    }
}

/// Failure raised by a classifier while scoring a single vector
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct InferenceError(pub String);

/// Per-request prediction failures
#[derive(Debug, Clone, Error)]
pub enum PredictError {
    /// The bundle failed to load at startup; carries the stored message
    #[error("{0}")]
    ModelUnavailable(String),

    #[error("could not convert {value:?} to a number for feature '{feature}'")]
    InvalidValue { feature: String, value: String },

    #[error("missing value for feature '{0}'")]
    MissingFeature(String),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Trainer failures; all of them abort the run
#[derive(Debug, Error)]
pub enum TrainError {
    #[error("Dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset has no header row")]
    MissingHeader,

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid value {value:?} in column '{column}'")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },

    #[error("dataset contains no rows")]
    EmptyDataset,

    #[error("failed to fit decision tree: {0}")]
    Fit(String),

    #[error("failed to encode model bundle: {0}")]
    Encode(#[from] bincode::Error),
}
