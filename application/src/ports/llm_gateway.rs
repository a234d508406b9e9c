//! LLM Gateway port
//!
//! Defines the interface for communicating with the model provider.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Rate limited by provider")]
    RateLimited {
        /// Provider-suggested wait, when it sent one
        retry_after: Option<Duration>,
    },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("No response from model")]
    EmptyResponse,

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// Whether the provider asked us to slow down
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GatewayError::RateLimited { .. })
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            GatewayError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

/// Gateway for LLM communication
///
/// Submits one prompt and returns the model's free text. Implementations
/// (adapters) live in the infrastructure layer; tests use scripted stubs.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Identifier of the model behind this gateway, for logs
    fn model(&self) -> &str;

    /// Send a prompt and get the reply text
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_detection() {
        let limited = GatewayError::RateLimited {
            retry_after: Some(Duration::from_secs(2)),
        };
        assert!(limited.is_rate_limited());
        assert_eq!(limited.retry_after(), Some(Duration::from_secs(2)));

        assert!(!GatewayError::Timeout.is_rate_limited());
        assert_eq!(GatewayError::EmptyResponse.retry_after(), None);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            GatewayError::EmptyResponse.to_string(),
            "No response from model"
        );
        assert_eq!(
            GatewayError::ConnectionError("refused".to_string()).to_string(),
            "Connection error: refused"
        );
    }
}
