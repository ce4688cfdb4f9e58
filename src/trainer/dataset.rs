//! CSV dataset loading for the trainer

use ndarray::{Array1, Array2, Axis};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::TrainError;

/// Feature matrix plus binary labels, with the column names in matrix order
#[derive(Debug, Clone)]
pub struct TrainingData {
    pub feature_names: Vec<String>,
    pub records: Array2<f64>,
    pub labels: Array1<usize>,
}

impl TrainingData {
    /// Read the named feature and label columns from a CSV file
    pub fn from_csv_path(path: &Path, features: &[&str], label: &str) -> Result<Self, TrainError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TrainError::DatasetNotFound(path.to_path_buf()),
            _ => TrainError::Io(e),
        })?;
        Self::from_reader(BufReader::new(file), features, label)
    }

    /// Read from any buffered source. The first non-blank line is the header;
    /// columns not named in `features` or `label` are skipped.
    pub fn from_reader<R: BufRead>(
        reader: R,
        features: &[&str],
        label: &str,
    ) -> Result<Self, TrainError> {
        let mut lines = reader.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((_, line)) => {
                    let line = line?;
                    if !line.trim().is_empty() {
                        break split_record(&line);
                    }
                }
                None => return Err(TrainError::MissingHeader),
            }
        };

        let column_of = |name: &str| {
            header
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| TrainError::MissingColumn(name.to_string()))
        };
        let feature_idx = features
            .iter()
            .map(|&name| column_of(name))
            .collect::<Result<Vec<_>, _>>()?;
        let label_idx = column_of(label)?;

        let mut values = Vec::new();
        let mut labels = Vec::new();

        for (idx, line) in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = idx + 1;
            let fields = split_record(&line);
            if fields.len() != header.len() {
                return Err(TrainError::RaggedRow {
                    line: line_no,
                    expected: header.len(),
                    found: fields.len(),
                });
            }

            for (&col, name) in feature_idx.iter().zip(features) {
                values.push(parse_feature(&fields[col], line_no, name)?);
            }
            labels.push(parse_label(&fields[label_idx], line_no, label)?);
        }

        if labels.is_empty() {
            return Err(TrainError::EmptyDataset);
        }

        let records = Array2::from_shape_vec((labels.len(), features.len()), values)
            .map_err(|e| TrainError::Fit(e.to_string()))?;

        Ok(Self {
            feature_names: features.iter().map(|s| s.to_string()).collect(),
            records,
            labels: Array1::from(labels),
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Rows at `indices`, in that order
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            feature_names: self.feature_names.clone(),
            records: self.records.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
        }
    }

    /// Number of rows carrying `label`
    pub fn count_label(&self, label: usize) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}

fn parse_feature(raw: &str, line: usize, column: &str) -> Result<f64, TrainError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TrainError::InvalidValue {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn parse_label(raw: &str, line: usize, column: &str) -> Result<usize, TrainError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v == 0.0 => Ok(0),
        Ok(v) if v == 1.0 => Ok(1),
        _ => Err(TrainError::InvalidValue {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Split one CSV line into unquoted fields. Handles `"..."` quoting with
/// `""` as an escaped quote.
fn split_record(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
