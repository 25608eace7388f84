//! Model value object representing the language model behind the concierge

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language models the concierge can be configured with (Value Object)
///
/// The model is an operator setting. Shoppers never choose it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini25Flash,
    Gemini25Pro,
    Gemini25FlashLite,
    Gemini20Flash,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Custom(s) => s,
        }
    }

    /// Check if this model is one of the known Gemini identifiers
    pub fn is_known(&self) -> bool {
        !matches!(self, Model::Custom(_))
    }
}

impl Default for Model {
    /// Returns the default model (Gemini 2.5 Flash)
    fn default() -> Self {
        Model::Gemini25Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_parses() {
        let model: Model = "gemini-2.5-pro".parse().unwrap();
        assert_eq!(model, Model::Gemini25Pro);
        assert!(model.is_known());
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-exp-1206".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-exp-1206".to_string()));
        assert_eq!(model.to_string(), "gemini-exp-1206");
        assert!(!model.is_known());
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "gemini-2.5-flash");
    }

    #[test]
    fn test_model_serializes_as_identifier() {
        let json = serde_json::to_string(&Model::Gemini20Flash).unwrap();
        assert_eq!(json, "\"gemini-2.0-flash\"");
        let back: Model = serde_json::from_str("\"gemini-2.5-flash\"").unwrap();
        assert_eq!(back, Model::Gemini25Flash);
    }
}
