//! Prompt templates for the culinary concierge

mod template;

pub use template::PromptTemplate;
