//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording the transcript of a
//! chat session (user messages, assistant replies, gateway failures).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures the transcript in a
//! machine-readable format (JSONL). The transcript is write-only; it is never
//! read back into a conversation.

use assistant_domain::Message;
use serde_json::Value;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "user_message", "gateway_error").
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

    /// Event for an appended message, typed `user_message` or
    /// `assistant_message`.
    pub fn message(message: &Message) -> Self {
        let event_type = if message.is_user() {
            "user_message"
        } else {
            "assistant_message"
        };
        Self::new(
            event_type,
            serde_json::json!({
                "id": message.id().value(),
                "content": message.content(),
                "created_at": message.timestamp().to_rfc3339(),
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and non-fallible; logging failures never disturb the
/// conversation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
