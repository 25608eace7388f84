//! Presentation layer for misscan-concierge
//!
//! This crate contains the CLI definition, console and markdown output,
//! the thinking spinner, and the interactive storefront.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod storefront;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use output::markdown::{render_markdown, sanitize};
pub use progress::ThinkingSpinner;
pub use storefront::{CardIntent, ReplCommand, StorefrontRepl, ask_once};
