//! Domain layer for misscan-concierge
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Catalog**: the fixed, ordered range of Miss Can tins shown in the storefront
//! - **Chat session**: an append-only transcript between the shopper and the
//!   culinary concierge, optionally anchored to one product
//! - **Prompt**: the concierge persona and the prompt sent for each question

pub mod catalog;
pub mod chat;
pub mod core;
pub mod prompt;

// Re-export commonly used types
pub use catalog::{Catalog, Product, ProductId};
pub use chat::{
    messages::{CONTEXT_GREETING_TEMPLATE, WELCOME_MESSAGE, context_greeting},
    session::{ChatSession, ContextChange},
    value_objects::{Message, MessageId, Sender},
};
pub use core::{error::DomainError, model::Model, query::Query};
pub use prompt::PromptTemplate;
