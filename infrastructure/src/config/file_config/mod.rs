//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; [`FileConfig::validate`] reports values
//! that cannot be turned into runtime settings.

mod logging;
mod model;
mod quiz;
mod retry;
mod server;
mod validation;

pub use logging::{FileLoggingConfig, LogMode};
pub use model::FileModelConfig;
pub use quiz::FileQuizConfig;
pub use retry::FileRetryConfig;
pub use server::FileServerConfig;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};

use quiz_application::BehaviorConfig;
use quiz_domain::ConfidenceThreshold;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP listener
    pub server: FileServerConfig,
    /// Model provider
    pub model: FileModelConfig,
    /// Threshold and turn limits
    pub quiz: FileQuizConfig,
    /// Rate-limit backoff
    pub retry: FileRetryConfig,
    /// Log output
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.server.parse_bind().is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidBindAddress {
                    value: self.server.bind.clone(),
                },
                format!("server.bind: '{}' is not a socket address", self.server.bind),
            ));
        }

        if self.model.name.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName,
                "model.name: must not be empty",
            ));
        }

        if ConfidenceThreshold::new(self.quiz.threshold).is_err() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidThreshold,
                format!(
                    "quiz.threshold: {} is outside (0, 1]",
                    self.quiz.threshold
                ),
            ));
        }

        if self.quiz.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout {
                    field: "quiz.timeout_seconds".to_string(),
                },
                "quiz.timeout_seconds: must be greater than zero (omit it to disable)",
            ));
        }

        if self.model.request_timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout {
                    field: "model.request_timeout_seconds".to_string(),
                },
                "model.request_timeout_seconds: must be greater than zero",
            ));
        }

        if self.retry.initial_backoff_ms > self.retry.max_backoff_ms {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::BackoffInverted,
                format!(
                    "retry: initial_backoff_ms ({}) exceeds max_backoff_ms ({}); every wait is capped",
                    self.retry.initial_backoff_ms, self.retry.max_backoff_ms
                ),
            ));
        }

        issues
    }

    /// Build the turn behavior from the `[quiz]` and `[retry]` sections.
    ///
    /// An invalid threshold falls back to the default; callers are expected
    /// to have rejected it through [`validate`](Self::validate) first.
    pub fn behavior_config(&self) -> BehaviorConfig {
        let threshold = ConfidenceThreshold::new(self.quiz.threshold).unwrap_or_default();
        BehaviorConfig::from_timeout_seconds(self.quiz.timeout_seconds)
            .with_threshold(threshold)
            .with_renormalize(self.quiz.renormalize)
            .with_retry(self.retry.to_policy())
    }
}
