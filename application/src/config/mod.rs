//! Application-level configuration.
//!
//! This module provides configuration types that control how the turn use
//! case behaves:
//!
//! - [`BehaviorConfig`]: threshold, renormalization, turn timeout
//! - [`RetryPolicy`]: bounded exponential backoff for rate-limited calls

pub mod behavior;
pub mod retry_policy;

pub use behavior::BehaviorConfig;
pub use retry_policy::RetryPolicy;
