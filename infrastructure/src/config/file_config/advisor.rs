//! Advisor configuration from TOML (`[advisor]` section)

use crate::gemini::credential::ApiKeySource;
use crate::gemini::gateway::DEFAULT_BASE_URL;
use concierge_application::config::advisor_params::DEFAULT_TEMPERATURE;
use concierge_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAdvisorConfig {
    /// Model identifier (default: "gemini-2.5-flash").
    pub model: Model,
    /// Sampling temperature (default: 0.7).
    pub temperature: f32,
    /// Environment variable holding the API key (default: "API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for FileAdvisorConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            api_key_env: "API_KEY".to_string(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileAdvisorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Where the gateway reads the API key from; an explicit key wins
    pub fn api_key_source(&self) -> ApiKeySource {
        ApiKeySource::from_env(self.api_key_env.clone()).or_explicit(self.api_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_is_used() {
        let config = FileAdvisorConfig {
            api_key_env: "MISSCAN_TEST_UNSET_ADVISOR_KEY".to_string(),
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };
        assert_eq!(config.api_key_source().resolve().unwrap(), "from-file");
    }

    #[test]
    fn test_timeout() {
        let config = FileAdvisorConfig {
            timeout_seconds: 12,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(12));
    }
}
