//! Query value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A shopper question for the concierge (Value Object)
///
/// Always holds at least one non-whitespace character. The original text is
/// kept as typed; trimming only decides validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
}

impl Query {
    /// Try to create a new query, rejecting empty or whitespace-only text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyQuery)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_keeps_raw_text() {
        let q = Query::try_new("  wine pairing?  ").unwrap();
        assert_eq!(q.content(), "  wine pairing?  ");
    }

    #[test]
    fn test_whitespace_only_is_rejected() {
        assert_eq!(Query::try_new(" \t\n"), Err(DomainError::EmptyQuery));
        assert_eq!(Query::try_new(""), Err(DomainError::EmptyQuery));
    }

    #[test]
    fn test_display_is_content() {
        let q = Query::try_new("recipe please").unwrap();
        assert_eq!(q.to_string(), "recipe please");
    }
}
