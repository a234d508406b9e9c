//! Model provider configuration from TOML (`[model]` section)

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completions provider.
///
/// ```toml
/// [model]
/// name = "gpt-4"
/// base_url = "https://api.openai.com"
/// api_key_env = "GPT4_API_KEY"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier sent to the provider
    pub name: String,
    /// Base URL for the API (can be overridden for compatible servers).
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Max tokens per reply; provider default when unset.
    pub max_tokens: Option<u32>,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_seconds: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: "gpt-4".to_string(),
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "GPT4_API_KEY".to_string(),
            api_key: None,
            max_tokens: None,
            request_timeout_seconds: 120,
        }
    }
}

impl FileModelConfig {
    /// API key from the config file, else from `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    /// Like [`resolve_api_key`](Self::resolve_api_key), failing when absent.
    pub fn require_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key()
            .ok_or_else(|| ConfigError::MissingApiKey {
                env: self.api_key_env.clone(),
            })
    }
}
