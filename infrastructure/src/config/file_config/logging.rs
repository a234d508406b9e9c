//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Log output style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    /// Pretty, human-readable records at debug level
    Development,
    /// JSON records at info level
    #[default]
    Production,
}

/// Raw logging configuration from TOML
///
/// ```toml
/// [logging]
/// mode = "development"
/// file = "/var/log/sorting-quiz/server.log"
/// transcript = "/var/log/sorting-quiz/transcript.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Output style and default level
    pub mode: LogMode,
    /// Also write operation logs to this file
    pub file: Option<String>,
    /// JSONL transcript of every prompt and reply
    pub transcript: Option<String>,
}

impl FileLoggingConfig {
    /// Default tracing filter directive for the mode
    pub fn default_level(&self) -> &'static str {
        match self.mode {
            LogMode::Development => "debug",
            LogMode::Production => "info",
        }
    }
}
