//! Prediction verdict

use std::fmt;

/// Label the classifier emits for a fraudulent transaction
pub const FRAUD_LABEL: usize = 1;

/// Binary outcome of a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Fraudulent,
    NotFraudulent,
}

impl Verdict {
    /// Label `1` is fraud; every other label is not
    pub fn from_label(label: usize) -> Self {
        if label == FRAUD_LABEL {
            Verdict::Fraudulent
        } else {
            Verdict::NotFraudulent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Fraudulent => "Fraudulent",
            Verdict::NotFraudulent => "Not Fraudulent",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
