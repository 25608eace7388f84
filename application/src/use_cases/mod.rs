//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod advise;
pub mod chat_session;
pub mod storefront;
