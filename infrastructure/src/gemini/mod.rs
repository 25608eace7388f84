//! Gemini adapter
//!
//! Talks to the Google Generative Language REST API
//! (`models/{model}:generateContent`) to implement the
//! [`AdviceGateway`](concierge_application::AdviceGateway) port.
//!
//! - [`gateway::GeminiAdviceGateway`]: the port implementation (reqwest)
//! - [`credential::ApiKeySource`]: where the API key comes from
//! - [`types`]: wire types for request and response bodies

pub mod credential;
pub mod gateway;
pub mod types;
