//! Errors raised while turning configuration into runtime settings

use super::file_config::ConfigIssue;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("no API key: set {env} or model.api_key")]
    MissingApiKey { env: String },

    #[error("invalid configuration:\n{}", format_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

fn format_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  - {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_invalid_lists_each_issue() {
        let mut config = FileConfig::default();
        config.quiz.threshold = 0.0;
        config.quiz.timeout_seconds = Some(0);

        let message = ConfigError::Invalid(config.validate()).to_string();
        assert!(message.starts_with("invalid configuration:"));
        assert!(message.contains("error: quiz.threshold"));
        assert!(message.contains("error: quiz.timeout_seconds"));
    }

    #[test]
    fn test_missing_api_key_names_variable() {
        let err = ConfigError::MissingApiKey {
            env: "GPT4_API_KEY".to_string(),
        };
        assert_eq!(err.to_string(), "no API key: set GPT4_API_KEY or model.api_key");
    }
}
