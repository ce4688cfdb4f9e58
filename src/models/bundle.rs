//! Model bundle: the fitted tree plus the feature order it was trained on

use linfa_trees::DecisionTree;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LoadError, TrainError};

/// Persisted record shared by the trainer and the predictor
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelBundle {
    pub model: DecisionTree<f64, usize>,
    pub feature_names: Vec<String>,
}

impl ModelBundle {
    pub fn new(model: DecisionTree<f64, usize>, feature_names: Vec<String>) -> Self {
        Self { model, feature_names }
    }

    /// Write the bundle, replacing any existing file at `path`.
    ///
    /// Bytes go to a sibling `.tmp` file first and are renamed into place, so
    /// readers only ever see a complete bundle.
    pub fn save(&self, path: &Path) -> Result<(), TrainError> {
        let tmp_path = temp_path(path);

        let result = self
            .write_to(&tmp_path)
            .and_then(|()| fs::rename(&tmp_path, path).map_err(TrainError::from));
        if let Err(e) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        tracing::debug!(path = %path.display(), "Model bundle written");
        Ok(())
    }

    fn write_to(&self, tmp_path: &Path) -> Result<(), TrainError> {
        let mut writer = BufWriter::new(File::create(tmp_path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }

    /// Read and validate a bundle from disk
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let reader = BufReader::new(File::open(path)?);
        let bundle: ModelBundle = bincode::deserialize_from(reader)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// A bundle is usable when it names at least one feature and the tree
    /// never splits on a column beyond that list.
    fn validate(&self) -> Result<(), LoadError> {
        if self.feature_names.is_empty() {
            return Err(LoadError::Malformed("feature_names is empty".to_string()));
        }

        if let Some(max_idx) = self.model.features().into_iter().max() {
            if max_idx >= self.feature_names.len() {
                return Err(LoadError::Malformed(format!(
                    "model splits on feature {} but only {} feature names are recorded",
                    max_idx,
                    self.feature_names.len()
                )));
            }
        }

        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
