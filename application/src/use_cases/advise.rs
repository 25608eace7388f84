//! Advise use case.
//!
//! Turns a shopper question (plus the product being looked at, if any) into
//! one line of concierge advice.
//!
//! [`CulinaryAdvisor`] is total: whatever happens on the way to the remote
//! model, the caller gets a displayable string. Failures are classified into
//! [`AdviceFailure`], logged, and replaced with a fixed fallback line. There is
//! exactly one attempt per question.

use crate::config::AdvisorParams;
use crate::ports::advice_gateway::{AdviceGateway, AdviceRequest, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use async_trait::async_trait;
use concierge_domain::{PromptTemplate, Query};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Reply when the credential is missing or the call failed
pub const FALLBACK_CHEF_AWAY: &str =
    "Our chef is currently stepping out for fresh ingredients. Please try again in a moment.";

/// Reply when the call succeeded but produced no text
pub const FALLBACK_KITCHEN_TROUBLE: &str =
    "I apologize, I'm having trouble connecting to the kitchen right now.";

/// Why an advice request did not produce model text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceFailure {
    /// No credential available
    ConfigurationMissing,
    /// Network, HTTP or decoding failure
    TransportFailure,
    /// The call succeeded without usable text
    EmptyResult,
}

impl AdviceFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdviceFailure::ConfigurationMissing => "configuration_missing",
            AdviceFailure::TransportFailure => "transport_failure",
            AdviceFailure::EmptyResult => "empty_result",
        }
    }

    /// The line shown to the shopper instead of advice
    pub fn fallback(&self) -> &'static str {
        match self {
            AdviceFailure::ConfigurationMissing | AdviceFailure::TransportFailure => {
                FALLBACK_CHEF_AWAY
            }
            AdviceFailure::EmptyResult => FALLBACK_KITCHEN_TROUBLE,
        }
    }
}

impl From<&GatewayError> for AdviceFailure {
    fn from(error: &GatewayError) -> Self {
        if error.is_configuration() {
            AdviceFailure::ConfigurationMissing
        } else {
            AdviceFailure::TransportFailure
        }
    }
}

/// Anything that can answer a shopper question with displayable text.
///
/// Implementations must never fail: errors are turned into text.
#[async_trait]
pub trait Advisor: Send + Sync {
    async fn advise(&self, query: &str, context_name: Option<&str>) -> String;
}

/// Advisor backed by a remote language model.
pub struct CulinaryAdvisor {
    gateway: Arc<dyn AdviceGateway>,
    params: AdvisorParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl CulinaryAdvisor {
    pub fn new(gateway: Arc<dyn AdviceGateway>, params: AdvisorParams) -> Self {
        Self {
            gateway,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn params(&self) -> &AdvisorParams {
        &self.params
    }

    /// Build the single outbound request for a question.
    pub fn build_request(&self, query: &Query, context_name: Option<&str>) -> AdviceRequest {
        AdviceRequest {
            model: self.params.model.clone(),
            prompt: PromptTemplate::advice_prompt(query.content(), context_name),
            system_instruction: self.params.system_instruction.clone(),
            temperature: self.params.temperature,
        }
    }

    /// Ask the model, classifying every way it can go wrong.
    pub async fn try_advise(
        &self,
        query: &str,
        context_name: Option<&str>,
    ) -> Result<String, AdviceFailure> {
        let Ok(query) = Query::try_new(query) else {
            debug!("Blank query reached the advisor; nothing to ask");
            return Err(AdviceFailure::EmptyResult);
        };

        let request = self.build_request(&query, context_name);
        debug!(
            model = %request.model,
            context = context_name.unwrap_or("-"),
            prompt_bytes = request.prompt.len(),
            "Requesting culinary advice"
        );

        match self.gateway.generate(&request).await {
            Ok(Some(text)) if !text.trim().is_empty() => {
                info!(bytes = text.len(), "Received culinary advice");
                Ok(text)
            }
            Ok(_) => {
                warn!("Model returned no text");
                self.log_fallback(AdviceFailure::EmptyResult, "no text in response");
                Err(AdviceFailure::EmptyResult)
            }
            Err(e) => {
                let failure = AdviceFailure::from(&e);
                warn!(kind = failure.as_str(), "Error communicating with the model: {}", e);
                self.log_fallback(failure, &e.to_string());
                Err(failure)
            }
        }
    }

    fn log_fallback(&self, failure: AdviceFailure, detail: &str) {
        self.conversation_logger
            .log(ConversationEvent::advice_fallback(failure.as_str(), detail));
    }
}

#[async_trait]
impl Advisor for CulinaryAdvisor {
    async fn advise(&self, query: &str, context_name: Option<&str>) -> String {
        match self.try_advise(query, context_name).await {
            Ok(text) => text,
            Err(failure) => failure.fallback().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    enum Behavior {
        Reply(Option<String>),
        MissingKey,
        Transport,
        Http(u16),
        Timeout,
    }

    struct MockGateway {
        behavior: Behavior,
        requests: Mutex<Vec<AdviceRequest>>,
    }

    impl MockGateway {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<AdviceRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AdviceGateway for MockGateway {
        async fn generate(
            &self,
            request: &AdviceRequest,
        ) -> Result<Option<String>, GatewayError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.behavior {
                Behavior::Reply(text) => Ok(text.clone()),
                Behavior::MissingKey => Err(GatewayError::ConfigurationMissing(
                    "API_KEY".to_string(),
                )),
                Behavior::Transport => {
                    Err(GatewayError::Transport("connection refused".to_string()))
                }
                Behavior::Http(status) => Err(GatewayError::Http {
                    status: *status,
                    body: "error".to_string(),
                }),
                Behavior::Timeout => Err(GatewayError::Timeout),
            }
        }
    }

    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn advisor(behavior: Behavior) -> (CulinaryAdvisor, Arc<MockGateway>) {
        let gateway = Arc::new(MockGateway::new(behavior));
        let advisor = CulinaryAdvisor::new(gateway.clone(), AdvisorParams::default());
        (advisor, gateway)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_returns_model_text() {
        let (advisor, _) = advisor(Behavior::Reply(Some("Try a Vinho Verde.".to_string())));
        assert_eq!(
            advisor.advise("wine pairing?", None).await,
            "Try a Vinho Verde."
        );
    }

    #[tokio::test]
    async fn test_request_carries_fixed_settings_and_context() {
        let (advisor, gateway) = advisor(Behavior::Reply(Some("ok".to_string())));
        advisor
            .advise("wine pairing?", Some("Mackerel Fillets in Spicy Oil"))
            .await;

        let requests = gateway.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.model.as_str(), "gemini-2.5-flash");
        assert!((request.temperature - 0.7).abs() < f32::EPSILON);
        assert_eq!(
            request.system_instruction,
            PromptTemplate::concierge_system()
        );
        assert!(request
            .prompt
            .starts_with("Context: The user is looking at the product \"Mackerel Fillets in Spicy Oil\"."));
        assert!(request.prompt.ends_with("User Query: wine pairing?"));
    }

    #[tokio::test]
    async fn test_query_passes_unmodified_without_context() {
        let (advisor, gateway) = advisor(Behavior::Reply(Some("ok".to_string())));
        advisor.advise("best sardine toast?", None).await;
        assert_eq!(gateway.requests()[0].prompt, "best sardine toast?");
    }

    #[tokio::test]
    async fn test_missing_credential_maps_to_chef_away() {
        let (advisor, _) = advisor(Behavior::MissingKey);
        assert_eq!(
            advisor.try_advise("recipe?", None).await,
            Err(AdviceFailure::ConfigurationMissing)
        );
        assert_eq!(advisor.advise("recipe?", None).await, FALLBACK_CHEF_AWAY);
    }

    #[tokio::test]
    async fn test_transport_failures_map_to_chef_away() {
        for behavior in [Behavior::Transport, Behavior::Http(500), Behavior::Timeout] {
            let (advisor, _) = advisor(behavior);
            assert_eq!(
                advisor.try_advise("recipe?", None).await,
                Err(AdviceFailure::TransportFailure)
            );
            assert_eq!(advisor.advise("recipe?", None).await, FALLBACK_CHEF_AWAY);
        }
    }

    #[tokio::test]
    async fn test_empty_or_blank_result_maps_to_kitchen_trouble() {
        for reply in [None, Some(String::new()), Some("  \n".to_string())] {
            let (advisor, _) = advisor(Behavior::Reply(reply));
            assert_eq!(
                advisor.advise("recipe?", None).await,
                FALLBACK_KITCHEN_TROUBLE
            );
        }
    }

    #[tokio::test]
    async fn test_blank_query_is_not_sent() {
        let (advisor, gateway) = advisor(Behavior::Reply(Some("ok".to_string())));
        assert_eq!(advisor.advise("   ", None).await, FALLBACK_KITCHEN_TROUBLE);
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fallbacks_are_logged() {
        let logger = Arc::new(RecordingLogger {
            events: Mutex::new(Vec::new()),
        });
        let gateway = Arc::new(MockGateway::new(Behavior::Transport));
        let advisor = CulinaryAdvisor::new(gateway, AdvisorParams::default())
            .with_conversation_logger(logger.clone());

        advisor.advise("recipe?", None).await;
        assert_eq!(*logger.events.lock().unwrap(), vec!["advice_fallback"]);
    }
}
