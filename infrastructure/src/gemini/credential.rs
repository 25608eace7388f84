//! API key lookup

use concierge_application::GatewayError;

/// Variable consulted when the configured one is unset
pub const SECONDARY_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Where the API key comes from.
///
/// The key is looked up on every request rather than at startup, so a
/// missing key is a per-request condition, not a startup failure.
#[derive(Debug, Clone)]
pub struct ApiKeySource {
    explicit: Option<String>,
    env_vars: Vec<String>,
}

impl ApiKeySource {
    /// Read the key from `env_var`, then from `GEMINI_API_KEY`
    pub fn from_env(env_var: impl Into<String>) -> Self {
        let env_var = env_var.into();
        let mut env_vars = vec![env_var.clone()];
        if env_var != SECONDARY_API_KEY_ENV {
            env_vars.push(SECONDARY_API_KEY_ENV.to_string());
        }
        Self {
            explicit: None,
            env_vars,
        }
    }

    /// Only look at the given variables (no secondary fallback)
    pub fn env_only(env_vars: Vec<String>) -> Self {
        Self {
            explicit: None,
            env_vars,
        }
    }

    /// Use a key given directly (config file or tests)
    pub fn explicit(key: impl Into<String>) -> Self {
        Self {
            explicit: Some(key.into()),
            env_vars: Vec::new(),
        }
    }

    /// Prefer `key` when present, otherwise this source
    pub fn or_explicit(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.explicit = Some(key);
        }
        self
    }

    /// Resolve the key now.
    pub fn resolve(&self) -> Result<String, GatewayError> {
        if let Some(key) = &self.explicit {
            return Ok(key.clone());
        }

        self.env_vars
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.trim().is_empty())
            .ok_or_else(|| {
                GatewayError::ConfigurationMissing(
                    self.env_vars
                        .first()
                        .cloned()
                        .unwrap_or_else(|| "API key".to_string()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins() {
        let source = ApiKeySource::env_only(vec!["MISSCAN_TEST_UNSET_KEY_A".to_string()])
            .or_explicit(Some("k-123".to_string()));
        assert_eq!(source.resolve().unwrap(), "k-123");
    }

    #[test]
    fn test_blank_explicit_key_is_ignored() {
        let source = ApiKeySource::env_only(vec!["MISSCAN_TEST_UNSET_KEY_B".to_string()])
            .or_explicit(Some("  ".to_string()));
        assert!(source.resolve().is_err());
    }

    #[test]
    fn test_missing_key_names_configured_variable() {
        let source = ApiKeySource::env_only(vec!["MISSCAN_TEST_UNSET_KEY_C".to_string()]);
        match source.resolve() {
            Err(GatewayError::ConfigurationMissing(name)) => {
                assert_eq!(name, "MISSCAN_TEST_UNSET_KEY_C")
            }
            other => panic!("expected ConfigurationMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_from_env_adds_secondary_variable() {
        let source = ApiKeySource::from_env("API_KEY");
        assert_eq!(source.env_vars, vec!["API_KEY", SECONDARY_API_KEY_ENV]);

        let source = ApiKeySource::from_env(SECONDARY_API_KEY_ENV);
        assert_eq!(source.env_vars, vec![SECONDARY_API_KEY_ENV]);
    }
}
