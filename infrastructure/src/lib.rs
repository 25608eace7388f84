//! Infrastructure layer for misscan-concierge
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAdvisorConfig, FileConfig, FileLoggingConfig,
    FileReplConfig,
};
pub use gemini::{
    credential::ApiKeySource,
    gateway::{DEFAULT_BASE_URL, GeminiAdviceGateway},
};
pub use logging::JsonlConversationLogger;
