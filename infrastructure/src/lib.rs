//! Infrastructure layer for sorting-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileLoggingConfig, FileModelConfig,
    FileQuizConfig, FileRetryConfig, FileServerConfig, LogMode, Severity,
};
pub use logging::JsonlConversationLogger;
pub use providers::{OpenAiGateway, OpenAiSettings};
