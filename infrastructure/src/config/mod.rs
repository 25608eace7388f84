//! Configuration file loading for misscan-concierge
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MISSCAN_` prefixed environment variables (`MISSCAN_ADVISOR__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./misscan.toml` or `./.misscan.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/misscan-concierge/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAdvisorConfig, FileConfig, FileLoggingConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
