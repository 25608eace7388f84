//! Presentation-level configuration
//!
//! REPL behavior as the storefront sees it. Built by the binary from the
//! `[repl]` file section and CLI flags.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the animated "thinking" spinner
    pub show_progress: bool,
    /// Path to history file (`None` disables history)
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
