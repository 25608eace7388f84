//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod advisor;
mod logging;
mod repl;

pub use advisor::FileAdvisorConfig;
pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;

use concierge_application::AdvisorParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("temperature must be between 0.0 and 2.0 (got {0})")]
    InvalidTemperature(f32),

    #[error("api_key_env cannot be empty")]
    EmptyApiKeyEnv,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote model settings
    pub advisor: FileAdvisorConfig,
    /// Interactive storefront settings
    pub repl: FileReplConfig,
    /// Structured conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.advisor.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.advisor.model.as_str().trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        let temperature = self.advisor.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigValidationError::InvalidTemperature(temperature));
        }

        if self.advisor.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiKeyEnv);
        }

        Ok(())
    }

    /// Advisor parameters for the application layer
    pub fn advisor_params(&self) -> AdvisorParams {
        AdvisorParams::default()
            .with_model(self.advisor.model.clone())
            .with_temperature(self.advisor.temperature)
    }
}
