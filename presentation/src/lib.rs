//! Presentation layer for sorting-quiz
//!
//! This crate contains the HTTP API (axum router, handlers, error mapping)
//! and the command-line definition of the server binary.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, create_router};
