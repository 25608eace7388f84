//! Product entity

use serde::{Deserialize, Serialize};

/// Product identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tin in the range (Entity)
///
/// Read-only for the chat core, which only ever looks at [`Product::name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pairing_notes: Option<String>,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: description.into(),
            image_url: image_url.into(),
            pairing_notes: None,
        }
    }

    /// Attach tasting or pairing notes
    pub fn with_pairing_notes(mut self, notes: impl Into<String>) -> Self {
        self.pairing_notes = Some(notes.into());
        self
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn pairing_notes(&self) -> Option<&str> {
        self.pairing_notes.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairing_notes_are_optional() {
        let product = Product::new("1", "Sardines", "Silver", "https://example.com/s.jpg");
        assert!(product.pairing_notes().is_none());

        let product = product.with_pairing_notes("Vinho Verde");
        assert_eq!(product.pairing_notes(), Some("Vinho Verde"));
    }

    #[test]
    fn test_pairing_notes_omitted_from_json_when_absent() {
        let product = Product::new("1", "Sardines", "Silver", "https://example.com/s.jpg");
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("pairing_notes").is_none());
        assert_eq!(json["id"], "1");
    }
}
