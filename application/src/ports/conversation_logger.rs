//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording chat events
//! (session opened, messages appended, absorbed advice failures) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port captures chat events in a
//! machine-readable format (JSONL). The log is write-only; nothing restores a
//! transcript from it.

use concierge_domain::Message;
use serde_json::{Value, json};

/// A structured chat event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "session_opened", "message").
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

    /// A new chat session was created
    pub fn session_opened(session_id: &str) -> Self {
        Self::new("session_opened", json!({ "session": session_id }))
    }

    /// The session was anchored to a product
    pub fn context_attached(session_id: &str, product_name: &str) -> Self {
        Self::new(
            "context_attached",
            json!({ "session": session_id, "product": product_name }),
        )
    }

    /// A message was appended to the transcript
    pub fn message(session_id: &str, message: &Message) -> Self {
        Self::new(
            "message",
            json!({
                "session": session_id,
                "id": message.id().as_str(),
                "sender": message.sender().as_str(),
                "text": message.text(),
                "at": message.timestamp().to_rfc3339(),
            }),
        )
    }

    /// The advisor swallowed a failure and answered with a fallback line
    pub fn advice_fallback(kind: &str, detail: &str) -> Self {
        Self::new(
            "advice_fallback",
            json!({ "kind": kind, "detail": detail }),
        )
    }
}

/// Port for logging chat events to a structured log.
///
/// The `log` method is synchronous and non-fallible so that a broken log
/// never disturbs the conversation.
pub trait ConversationLogger: Send + Sync {
    /// Record a chat event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
