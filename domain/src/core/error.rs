//! Domain error types

use thiserror::Error;

/// A probability update that would push a category outside `[0, 1]`.
///
/// Raised by [`apply_update`](crate::quiz::ledger::apply_update) before any
/// category is touched, so the ledger is never partially mutated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Probability for '{category}' must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { category: String, value: f64 },
}

/// Model output that could not be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("Malformed model response: {reason}")]
    Malformed { reason: String, raw: String },

    #[error("Model returned an empty response")]
    Empty,
}

impl ResponseError {
    pub(crate) fn malformed(reason: impl Into<String>, raw: &str) -> Self {
        ResponseError::Malformed {
            reason: reason.into(),
            raw: raw.to_string(),
        }
    }

    /// Raw model text, when the error carries it
    pub fn raw(&self) -> Option<&str> {
        match self {
            ResponseError::Malformed { raw, .. } => Some(raw),
            ResponseError::Empty => None,
        }
    }
}

/// A client-submitted quiz state that cannot be processed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Quiz state has no categories")]
    NoCategories,

    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    #[error("Category name contains control characters: {0:?}")]
    ControlCharacterInName(String),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Invalid probability for '{category}': {value}")]
    InvalidProbability { category: String, value: f64 },

    #[error("Invalid confidence threshold: {0}")]
    InvalidThreshold(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::ProbabilityOutOfRange {
            category: "Wordcel".to_string(),
            value: 1.5,
        };
        assert_eq!(
            error.to_string(),
            "Probability for 'Wordcel' must be within [0, 1], got 1.5"
        );
    }

    #[test]
    fn test_response_error_raw() {
        let error = ResponseError::malformed("expected object", "not json");
        assert_eq!(error.raw(), Some("not json"));
        assert_eq!(ResponseError::Empty.raw(), None);
    }
}
