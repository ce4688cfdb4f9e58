//! Feature vector assembly from submitted form fields

use std::collections::HashMap;

use crate::error::PredictError;

/// How to treat a feature the request does not mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFeature {
    /// Substitute 0.0
    #[default]
    Zero,
    /// Reject the request
    Reject,
}

/// Build the ordered vector the classifier expects.
///
/// The result always has one value per entry of `feature_names`, in that
/// order, regardless of the order or extra keys in `fields`.
pub fn build_vector(
    feature_names: &[String],
    fields: &HashMap<String, String>,
    missing: MissingFeature,
) -> Result<Vec<f64>, PredictError> {
    feature_names
        .iter()
        .map(|name| match fields.get(name) {
            Some(raw) => parse_value(name, raw),
            None => match missing {
                MissingFeature::Zero => Ok(0.0),
                MissingFeature::Reject => Err(PredictError::MissingFeature(name.clone())),
            },
        })
        .collect()
}

fn parse_value(feature: &str, raw: &str) -> Result<f64, PredictError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| PredictError::InvalidValue {
            feature: feature.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_vector_follows_feature_order() {
        let fields = form(&[("c", "3"), ("a", "1"), ("b", "2")]);
        let vector = build_vector(&names(&["a", "b", "c"]), &fields, MissingFeature::Zero).unwrap();
        assert_eq!(vector, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_missing_field_defaults_to_zero() {
        let fields = form(&[("a", "1.5"), ("c", "-2")]);
        let vector = build_vector(&names(&["a", "b", "c"]), &fields, MissingFeature::Zero).unwrap();
        assert_eq!(vector, vec![1.5, 0.0, -2.0]);
    }

    #[test]
    fn test_missing_field_rejected_in_strict_mode() {
        let fields = form(&[("a", "1.5"), ("c", "-2")]);
        let err = build_vector(&names(&["a", "b", "c"]), &fields, MissingFeature::Reject).unwrap_err();
        assert!(matches!(err, PredictError::MissingFeature(ref name) if name == "b"));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let fields = form(&[("a", "1"), ("Time", "999")]);
        let vector = build_vector(&names(&["a"]), &fields, MissingFeature::Zero).unwrap();
        assert_eq!(vector, vec![1.0]);
    }

    #[test]
    fn test_non_numeric_value_is_error() {
        let fields = form(&[("a", "abc")]);
        let err = build_vector(&names(&["a", "b"]), &fields, MissingFeature::Zero).unwrap_err();
        match err {
            PredictError::InvalidValue { feature, value } => {
                assert_eq!(feature, "a");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_is_error() {
        let fields = form(&[("a", "")]);
        assert!(build_vector(&names(&["a"]), &fields, MissingFeature::Zero).is_err());
    }

    #[test]
    fn test_whitespace_and_exponent_accepted() {
        let fields = form(&[("a", "  4.5 "), ("b", "1e3")]);
        let vector = build_vector(&names(&["a", "b"]), &fields, MissingFeature::Zero).unwrap();
        assert_eq!(vector, vec![4.5, 1000.0]);
    }
}
