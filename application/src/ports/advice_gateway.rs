//! Advice gateway port
//!
//! Defines the interface for asking a remote language model for advice.

use async_trait::async_trait;
use concierge_domain::Model;
use thiserror::Error;

/// Errors that can occur while talking to the remote model
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Credential missing: {0} is not set")]
    ConfigurationMissing(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

impl GatewayError {
    /// Whether the failure happened before any request was sent
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::ConfigurationMissing(_))
    }
}

/// One stateless request to the remote model.
///
/// No conversation history is carried; continuity lives only in the local
/// transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    pub model: Model,
    pub prompt: String,
    pub system_instruction: String,
    pub temperature: f32,
}

/// Gateway to the remote language model
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AdviceGateway: Send + Sync {
    /// Send one request.
    ///
    /// `Ok(None)` means the call succeeded but the model returned no text.
    async fn generate(&self, request: &AdviceRequest) -> Result<Option<String>, GatewayError>;
}
