//! Configuration file loading for sorting-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUIZ_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quiz.toml` or `./.quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sorting-quiz/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;
pub use file_config::{
    ConfigIssue, ConfigIssueCode, FileConfig, FileLoggingConfig, FileModelConfig, FileQuizConfig,
    FileRetryConfig, FileServerConfig, LogMode, Severity,
};
pub use loader::ConfigLoader;
