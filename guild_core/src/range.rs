//! Numeric ranges and inclusive bound validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An authored value range with at least one bound present.
///
/// Ranges come in three shapes: `{min}`, `{max}` and `{min, max}`. A range
/// with neither bound is an authoring error; it stays representable so loaded
/// content can be checked, and [`RangedNumber::validate`] refuses to answer
/// for it instead of quietly passing or failing the value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangedNumber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// The range carries neither a min nor a max, so validation has no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("range has neither a min nor a max bound")]
pub struct InvalidRangeError;

impl RangedNumber {
    /// Lower-bounded range.
    pub fn at_least(min: f64) -> Self {
        RangedNumber {
            min: Some(min),
            max: None,
        }
    }

    /// Upper-bounded range.
    pub fn at_most(max: f64) -> Self {
        RangedNumber {
            min: None,
            max: Some(max),
        }
    }

    /// Range bounded on both ends.
    pub fn between(min: f64, max: f64) -> Self {
        RangedNumber {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Check `value` against the bounds, inclusive at both ends.
    ///
    /// A malformed range is an `Err`, never `false`: callers must not be able
    /// to mistake bad authoring for a rejected value.
    pub fn validate(&self, value: f64) -> Result<bool, InvalidRangeError> {
        match (self.min, self.max) {
            (Some(min), Some(max)) => Ok(min <= value && value <= max),
            (Some(min), None) => Ok(min <= value),
            (None, Some(max)) => Ok(value <= max),
            (None, None) => Err(InvalidRangeError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_only_inclusive() {
        let range = RangedNumber::at_least(1.0);
        assert_eq!(range.validate(0.0), Ok(false));
        assert_eq!(range.validate(1.0), Ok(true));
        assert_eq!(range.validate(2.0), Ok(true));
    }

    #[test]
    fn test_max_only_inclusive() {
        let range = RangedNumber::at_most(1.0);
        assert_eq!(range.validate(0.0), Ok(true));
        assert_eq!(range.validate(1.0), Ok(true));
        assert_eq!(range.validate(2.0), Ok(false));
    }

    #[test]
    fn test_bounded_inclusive_at_both_ends() {
        let range = RangedNumber::between(1.0, 3.0);
        assert_eq!(range.validate(0.0), Ok(false));
        assert_eq!(range.validate(1.0), Ok(true));
        assert_eq!(range.validate(2.0), Ok(true));
        assert_eq!(range.validate(3.0), Ok(true));
        assert_eq!(range.validate(4.0), Ok(false));
    }

    #[test]
    fn test_unbounded_range_fails_loudly() {
        let range = RangedNumber {
            min: None,
            max: None,
        };
        assert_eq!(range.validate(0.0), Err(InvalidRangeError));
    }

    #[test]
    fn test_deserializes_all_three_shapes() {
        let min_only: RangedNumber = serde_json::from_str(r#"{"min": 0.0}"#).unwrap();
        assert_eq!(min_only, RangedNumber::at_least(0.0));

        let max_only: RangedNumber = serde_json::from_str(r#"{"max": 9.0}"#).unwrap();
        assert_eq!(max_only, RangedNumber::at_most(9.0));

        let bounded: RangedNumber = serde_json::from_str(r#"{"min": 1.0, "max": 99.0}"#).unwrap();
        assert_eq!(bounded, RangedNumber::between(1.0, 99.0));
    }
}
