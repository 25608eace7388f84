//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Structured conversation log settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving chat events; disabled when unset
    pub conversation_log: Option<String>,
}
