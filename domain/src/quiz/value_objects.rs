//! Quiz value objects

use crate::core::error::StateError;
use serde::{Deserialize, Serialize};

/// Probability a category must reach for the quiz to resolve (Value Object)
///
/// Always within `(0, 1]`. Defaults to [`ConfidenceThreshold::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceThreshold(f64);

impl ConfidenceThreshold {
    pub const DEFAULT: f64 = 0.8;

    pub fn new(value: f64) -> Result<Self, StateError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(StateError::InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether `probability` meets or exceeds the threshold
    pub fn is_reached_by(&self, probability: f64) -> bool {
        probability >= self.0
    }
}

impl Default for ConfidenceThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for ConfidenceThreshold {
    type Error = StateError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfidenceThreshold> for f64 {
    fn from(threshold: ConfidenceThreshold) -> Self {
        threshold.0
    }
}

impl std::fmt::Display for ConfidenceThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_default() {
        assert_eq!(ConfidenceThreshold::default().value(), 0.8);
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(ConfidenceThreshold::new(1.0).is_ok());
        assert!(ConfidenceThreshold::new(0.5).is_ok());
        assert!(ConfidenceThreshold::new(0.0).is_err());
        assert!(ConfidenceThreshold::new(1.01).is_err());
        assert!(ConfidenceThreshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let threshold = ConfidenceThreshold::default();
        assert!(threshold.is_reached_by(0.8));
        assert!(!threshold.is_reached_by(0.79));
    }

    #[test]
    fn test_threshold_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<ConfidenceThreshold>("0.9").is_ok());
        assert!(serde_json::from_str::<ConfidenceThreshold>("2.0").is_err());
    }
}
