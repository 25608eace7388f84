//! Advisor parameters: the fixed settings of every advice request.
//!
//! These are operator settings resolved once at startup. Nothing a shopper
//! types can change them.

use concierge_domain::{Model, PromptTemplate};
use serde::{Deserialize, Serialize};

/// Sampling temperature used unless configured otherwise
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Model and sampling settings for the culinary advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorParams {
    /// Model identifier sent with every request.
    pub model: Model,
    /// Sampling temperature.
    pub temperature: f32,
    /// Persona and style directive sent as the system instruction.
    pub system_instruction: String,
}

impl Default for AdvisorParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: DEFAULT_TEMPERATURE,
            system_instruction: PromptTemplate::concierge_system().to_string(),
        }
    }
}

impl AdvisorParams {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
