//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: the language model that answers the concierge's questions
//! - [`query::Query`]: a validated shopper question
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod query;
