//! Transcript view
//!
//! Bot messages are markdown; user messages are shown as typed. Both are
//! sanitized before they reach the terminal.

use crate::output::console::ConsoleFormatter;
use crate::output::markdown::{render_markdown, sanitize};
use chrono::Local;
use colored::Colorize;
use concierge_domain::{Message, Sender};

/// Render one message with its sender label and local time.
pub fn render_message(message: &Message) -> String {
    let time = message
        .timestamp()
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    match message.sender() {
        Sender::User => format!(
            "{} {}\n{}",
            "You".blue().bold(),
            time.dimmed(),
            ConsoleFormatter::indent(&sanitize(message.text()), "  ")
        ),
        Sender::Bot => format!(
            "{} {}\n{}",
            "Chef".yellow().bold(),
            time.dimmed(),
            ConsoleFormatter::indent(&render_markdown(message.text()), "  ")
        ),
    }
}

/// Render messages in transcript order, separated by blank lines.
pub fn render_transcript(messages: &[Message]) -> String {
    messages
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n\n")
}
