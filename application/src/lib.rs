//! Application layer for misscan-concierge
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AdvisorParams;
pub use ports::{
    advice_gateway::{AdviceGateway, AdviceRequest, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use use_cases::advise::{
    AdviceFailure, Advisor, CulinaryAdvisor, FALLBACK_CHEF_AWAY, FALLBACK_KITCHEN_TROUBLE,
};
pub use use_cases::chat_session::{ChatController, THINKING_INDICATOR};
pub use use_cases::storefront::{Storefront, StorefrontError};
