//! Turn behavior configuration.
//!
//! Controls how the turn use case decides and how long it may take.

use super::RetryPolicy;
use quiz_domain::ConfidenceThreshold;
use std::time::Duration;

/// Application behavior configuration.
///
/// Controls the resolution threshold, optional renormalization, the overall
/// turn timeout, and retry behavior for rate-limited model calls.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Probability a category must reach to resolve the quiz.
    pub threshold: ConfidenceThreshold,
    /// Rescale probabilities to sum to 1 after each update.
    pub renormalize: bool,
    /// Maximum time for a whole turn (both model calls).
    pub timeout: Option<Duration>,
    /// Retry schedule for rate-limited model calls.
    pub retry: RetryPolicy,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a turn timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Default::default()
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Default::default()
        }
    }

    pub fn with_threshold(mut self, threshold: ConfidenceThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_renormalize(mut self, renormalize: bool) -> Self {
        self.renormalize = renormalize;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = BehaviorConfig::default();
        assert_eq!(config.threshold.value(), 0.8);
        assert!(!config.renormalize);
        assert!(config.timeout.is_none());
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn test_from_timeout_seconds() {
        assert_eq!(
            BehaviorConfig::from_timeout_seconds(Some(30)).timeout,
            Some(Duration::from_secs(30))
        );
        assert!(BehaviorConfig::from_timeout_seconds(None).timeout.is_none());
        assert_eq!(
            BehaviorConfig::with_timeout_seconds(5).timeout,
            Some(Duration::from_secs(5))
        );
    }
}
