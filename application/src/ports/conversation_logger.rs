//! Port for structured conversation logging.
//!
//! Records every message sent to a remote agent and every reply, separate
//! from `tracing` diagnostics: tracing is for humans, this transcript is
//! machine-readable (one record per event).

use serde_json::Value;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (`agent_request`, `agent_response`, `agent_error`).
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
/// `log` is synchronous and infallible; implementations swallow write
/// failures.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
