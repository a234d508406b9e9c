//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording every prompt sent
//! to the model and every reply received, as a machine-readable transcript.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! diagnostic records with previews, while this port captures full texts.

use serde_json::Value;

/// A structured conversation event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. Adapters add the timestamp when they write the record.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "prompt_submitted", "response_received").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and infallible; a failing transcript must never fail
/// a quiz turn.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when the transcript is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
