//! Gemini implementation of [`AdviceGateway`]

use super::credential::ApiKeySource;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use concierge_application::{AdviceGateway, AdviceRequest, GatewayError};
use std::time::Duration;
use tracing::{debug, warn};

/// Default public endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Upper bound on error bodies kept in [`GatewayError::Http`]
const MAX_ERROR_BODY: usize = 512;

/// Gateway to the Gemini `generateContent` endpoint.
///
/// Every call is a single stateless request; the session transcript is never
/// sent.
pub struct GeminiAdviceGateway {
    client: reqwest::Client,
    base_url: String,
    credentials: ApiKeySource,
}

impl GeminiAdviceGateway {
    /// Build a gateway with the given request timeout
    pub fn new(
        base_url: impl Into<String>,
        credentials: ApiKeySource,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("misscan-concierge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Endpoint URL for one model
    pub fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        )
    }
}

#[async_trait]
impl AdviceGateway for GeminiAdviceGateway {
    async fn generate(&self, request: &AdviceRequest) -> Result<Option<String>, GatewayError> {
        let api_key = self.credentials.resolve()?;
        let url = self.endpoint(request.model.as_str());
        let body = GenerateContentRequest::from(request);

        debug!("POST {} ({} prompt bytes)", url, request.prompt.len());

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| body.is_char_boundary(*i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            warn!("Gemini returned HTTP {}", status.as_u16());
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;

        if let Some(reason) = parsed.block_reason() {
            debug!("Prompt blocked: {}", reason);
        }

        Ok(parsed.text())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Transport(err.to_string())
    }
}
