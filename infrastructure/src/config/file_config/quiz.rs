//! Quiz behavior configuration from TOML (`[quiz]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [quiz]
//! threshold = 0.8
//! renormalize = false
//! timeout_seconds = 60
//! ```

use serde::{Deserialize, Serialize};

/// Quiz resolution settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Probability a category must reach to win, in (0, 1]
    pub threshold: f64,
    /// Rescale probabilities to sum to 1 after each update
    pub renormalize: bool,
    /// Upper bound for one whole turn, in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        Self {
            threshold: quiz_domain::ConfidenceThreshold::DEFAULT,
            renormalize: false,
            timeout_seconds: Some(90),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_config_default() {
        let config = FileQuizConfig::default();
        assert_eq!(config.threshold, 0.8);
        assert!(!config.renormalize);
        assert_eq!(config.timeout_seconds, Some(90));
    }

    #[test]
    fn test_quiz_config_partial_override() {
        let config: FileQuizConfig = toml::from_str("threshold = 0.9").unwrap();
        assert_eq!(config.threshold, 0.9);
        assert_eq!(config.timeout_seconds, Some(90));
    }
}
