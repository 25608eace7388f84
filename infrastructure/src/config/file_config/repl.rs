//! REPL configuration from TOML (`[repl]` section)

use crate::config::ConfigLoader;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the "Consulting the chef..." spinner
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            color: true,
        }
    }
}

impl FileReplConfig {
    /// History file with `~/` expanded, or the default data-dir location
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => ConfigLoader::default_history_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_path_expands_home() {
        let config = FileReplConfig {
            history_file: Some("~/misscan/history.txt".to_string()),
            ..Default::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(config.history_path(), Some(home.join("misscan/history.txt")));
        }
    }

    #[test]
    fn test_history_path_verbatim() {
        let config = FileReplConfig {
            history_file: Some("/tmp/h.txt".to_string()),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/h.txt")));
    }
}
