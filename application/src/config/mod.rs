//! Application-level configuration.
//!
//! - [`AdvisorParams`]: fixed model settings for every advice request

pub mod advisor_params;

pub use advisor_params::AdvisorParams;
