//! Chat session entity

use super::messages::{WELCOME_MESSAGE, context_greeting};
use super::value_objects::Message;
use crate::catalog::Product;
use uuid::Uuid;

/// Outcome of anchoring a session to a product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextChange {
    /// First product for this session; a greeting was appended
    Attached,
    /// Same product as the active context; nothing appended
    Unchanged,
    /// A different product is already the active context; nothing appended
    Locked,
}

/// One conversation with the concierge (Entity)
///
/// Mutated only through a closed set of operations that keep the transcript
/// append-only and balanced: every user message is answered by exactly one
/// bot message, and at most one turn is open at a time.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: String,
    transcript: Vec<Message>,
    pending_input: String,
    awaiting_response: bool,
    active_context: Option<Product>,
}

impl ChatSession {
    /// Start a session seeded with the welcome message
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            transcript: vec![Message::bot(WELCOME_MESSAGE)],
            pending_input: String::new(),
            awaiting_response: false,
            active_context: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.awaiting_response
    }

    pub fn active_context(&self) -> Option<&Product> {
        self.active_context.as_ref()
    }

    /// Anchor the session to a product.
    ///
    /// The first product becomes the active context for the rest of the
    /// session and gets a contextual greeting.
    pub fn attach_context(&mut self, product: &Product) -> ContextChange {
        match &self.active_context {
            None => {
                self.transcript.push(Message::bot(context_greeting(product.name())));
                self.active_context = Some(product.clone());
                ContextChange::Attached
            }
            Some(active) if active.id() == product.id() => ContextChange::Unchanged,
            Some(_) => ContextChange::Locked,
        }
    }

    /// Replace the input buffer verbatim
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Whether [`begin_turn`](Self::begin_turn) would accept the current input
    pub fn can_submit(&self) -> bool {
        !self.awaiting_response && !self.pending_input.trim().is_empty()
    }

    /// Open a turn from the input buffer.
    ///
    /// Returns `None` and leaves the session untouched when a turn is already
    /// open or the trimmed input is empty. Otherwise appends the raw input as
    /// a user message, clears the buffer and marks the session as awaiting.
    pub fn begin_turn(&mut self) -> Option<Message> {
        if !self.can_submit() {
            return None;
        }

        let message = Message::user(std::mem::take(&mut self.pending_input));
        self.transcript.push(message.clone());
        self.awaiting_response = true;
        Some(message)
    }

    /// Close the open turn with the bot's reply.
    ///
    /// Returns `None` (and appends nothing) if no turn is open.
    pub fn complete_turn(&mut self, reply: impl Into<String>) -> Option<&Message> {
        if !self.awaiting_response {
            return None;
        }

        self.transcript.push(Message::bot(reply));
        self.awaiting_response = false;
        self.transcript.last()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
