//! Chat session controller.
//!
//! [`ChatController`] is the only writer of the chat transcript. It owns the
//! [`ChatSession`], drives the [`Advisor`] for each submitted question, and
//! folds the reply back into the transcript.
//!
//! A turn has two halves:
//!
//! 1. [`ChatController::submit`] validates the input buffer, appends the user
//!    message and spawns the advice call on the tokio runtime.
//! 2. [`ChatController::resolve`] waits for that call and appends exactly one
//!    bot message, whatever happened to the task.
//!
//! While a turn is open, further submits are rejected as no-ops; the input
//! buffer stays editable.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::use_cases::advise::{Advisor, FALLBACK_CHEF_AWAY};
use concierge_domain::{ChatSession, ContextChange, Message, Product};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Provisional line shown while a reply is pending (never stored)
pub const THINKING_INDICATOR: &str = "Consulting the chef...";

/// Owns one chat session and mediates every transcript mutation.
pub struct ChatController {
    advisor: Arc<dyn Advisor>,
    session: Option<ChatSession>,
    in_flight: Option<JoinHandle<String>>,
    visible: bool,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ChatController {
    pub fn new(advisor: Arc<dyn Advisor>) -> Self {
        Self {
            advisor,
            session: None,
            in_flight: None,
            visible: false,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    // ==================== Operations ====================

    /// Show the chat, creating the session on first use.
    ///
    /// The welcome message is seeded once per session. A product anchors the
    /// session the first time one is given; repeating it adds nothing, and a
    /// different product is ignored because the context is locked for the
    /// rest of the session (see [`restart`](Self::restart)).
    pub fn open(&mut self, context: Option<&Product>) {
        self.visible = true;

        if self.session.is_none() {
            let session = ChatSession::new();
            info!(session = session.id(), "Chat session opened");
            self.conversation_logger
                .log(ConversationEvent::session_opened(session.id()));
            for message in session.transcript() {
                self.conversation_logger
                    .log(ConversationEvent::message(session.id(), message));
            }
            self.session = Some(session);
        }

        let (Some(product), Some(session)) = (context, self.session.as_mut()) else {
            return;
        };

        match session.attach_context(product) {
            ContextChange::Attached => {
                info!(product = product.name(), "Chat anchored to product");
                self.conversation_logger.log(ConversationEvent::context_attached(
                    session.id(),
                    product.name(),
                ));
                if let Some(greeting) = session.transcript().last() {
                    self.conversation_logger
                        .log(ConversationEvent::message(session.id(), greeting));
                }
            }
            ContextChange::Unchanged => {
                debug!(product = product.name(), "Chat already anchored to product");
            }
            ContextChange::Locked => {
                debug!(
                    product = product.name(),
                    "Chat context is locked for this session; ignoring new product"
                );
            }
        }
    }

    /// Replace the input buffer verbatim (no trimming, no validation).
    pub fn update_input(&mut self, text: impl Into<String>) {
        match self.session.as_mut() {
            Some(session) => session.set_input(text),
            None => debug!("Input ignored: chat has not been opened"),
        }
    }

    /// Submit the input buffer as a question.
    ///
    /// No-op returning `None` when the chat was never opened, a reply is
    /// pending, or the trimmed input is empty. Otherwise returns the user
    /// message that was appended.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> Option<Message> {
        let session = self.session.as_mut()?;

        if session.is_awaiting_response() {
            debug!("Submit rejected: a reply is still pending");
            return None;
        }

        let message = session.begin_turn()?;
        let context_name = session.active_context().map(|p| p.name().to_string());
        self.conversation_logger
            .log(ConversationEvent::message(session.id(), &message));

        let advisor = Arc::clone(&self.advisor);
        let query = message.text().to_string();
        self.in_flight = Some(tokio::spawn(async move {
            advisor.advise(&query, context_name.as_deref()).await
        }));

        debug!(message = %message.id(), "Advice requested");
        Some(message)
    }

    /// Whether the pending reply can be resolved without waiting.
    pub fn is_reply_ready(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| handle.is_finished())
    }

    /// Wait for the pending reply and append it.
    ///
    /// Returns `None` when no turn is open. A task that panicked or was
    /// aborted still closes the turn, with the chef-away fallback line.
    ///
    /// The task handle stays in place until the task has finished, so a
    /// `resolve` future dropped mid-wait leaves the turn resolvable.
    pub async fn resolve(&mut self) -> Option<&Message> {
        let outcome = self.in_flight.as_mut()?.await;
        self.in_flight = None;

        let reply = match outcome {
            Ok(text) => text,
            Err(e) => {
                warn!("Advice task did not complete: {}", e);
                self.conversation_logger.log(ConversationEvent::advice_fallback(
                    "task_failure",
                    &e.to_string(),
                ));
                FALLBACK_CHEF_AWAY.to_string()
            }
        };

        let session = self.session.as_mut()?;
        let session_id = session.id().to_string();
        let message = session.complete_turn(reply)?;
        self.conversation_logger
            .log(ConversationEvent::message(&session_id, message));
        Some(message)
    }

    /// Submit and wait for the reply in one step.
    pub async fn submit_and_wait(&mut self) -> Option<&Message> {
        self.submit()?;
        self.resolve().await
    }

    /// Hide the chat. The transcript is kept for the next `open`.
    pub fn close(&mut self) {
        self.visible = false;
        debug!("Chat closed");
    }

    /// Discard the session and open a fresh one.
    ///
    /// Refused (returns `false`) while a reply is pending, so every user
    /// message keeps its answer.
    pub fn restart(&mut self, context: Option<&Product>) -> bool {
        if self.is_awaiting_response() {
            warn!("Cannot restart the chat while a reply is pending");
            return false;
        }

        if let Some(old) = self.session.take() {
            info!(session = old.id(), "Chat session discarded");
        }
        self.open(context);
        true
    }

    // ==================== Accessors ====================

    pub fn transcript(&self) -> &[Message] {
        self.session
            .as_ref()
            .map(|s| s.transcript())
            .unwrap_or_default()
    }

    pub fn pending_input(&self) -> &str {
        self.session
            .as_ref()
            .map(|s| s.pending_input())
            .unwrap_or_default()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.is_awaiting_response())
    }

    pub fn active_context(&self) -> Option<&Product> {
        self.session.as_ref().and_then(|s| s.active_context())
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.id())
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Whether the current input would be accepted by [`submit`](Self::submit)
    pub fn can_submit(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.can_submit())
    }
}
