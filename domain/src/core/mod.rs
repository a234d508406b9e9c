//! Core domain concepts shared across all subdomains.
//!
//! - [`error`]: validation, response and state errors
//! - [`string`]: UTF-8 safe truncation for log previews

pub mod error;
pub mod string;
