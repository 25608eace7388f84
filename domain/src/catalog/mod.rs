//! Product catalog domain.
//!
//! - [`product::Product`]: one tin in the Miss Can range
//! - [`Catalog`]: the fixed, ordered sequence of products on display

pub mod product;

pub use product::{Product, ProductId};

use crate::core::error::DomainError;

/// The fixed product range (read-only)
///
/// Order is meaningful: it is the display order of the storefront grid, and
/// shoppers refer to products by their 1-based position in it.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The Miss Can range as shown on the storefront
    pub fn miss_can() -> Self {
        Self {
            products: vec![
                Product::new(
                    "1",
                    "Sardines in Olive Oil",
                    "The classic Portuguese staple. Plump, silver sardines bathed in pure golden olive oil. Perfect on sourdough toast.",
                    "https://images.unsplash.com/photo-1599021456807-75278d5db5de?auto=format&fit=crop&w=800&q=80",
                ),
                Product::new(
                    "2",
                    "Mackerel Fillets in Spicy Oil",
                    "Hand-filleted mackerel with a piri-piri kick. A warming, savory delight that pairs beautifully with a crisp Vinho Verde.",
                    "https://images.unsplash.com/photo-1519708227418-c8fd9a3a2747?auto=format&fit=crop&w=800&q=80",
                ),
                Product::new(
                    "3",
                    "Tuna Fillets with Sweet Potato",
                    "A hearty Algarvian tradition. Tender tuna chunks combined with the sweetness of local sweet potatoes.",
                    "https://images.unsplash.com/photo-1606850780554-b55eaac84bc2?auto=format&fit=crop&w=800&q=80",
                ),
                Product::new(
                    "4",
                    "Codfish in Garlic and Oil",
                    "Bacalhau is king in Portugal. Preserved with aromatic garlic cloves for an instant, elegant meal.",
                    "https://images.unsplash.com/photo-1534483501941-b78d62855829?auto=format&fit=crop&w=800&q=80",
                ),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a product by its id
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Find a product by its 1-based display position
    pub fn at_position(&self, position: usize) -> Option<&Product> {
        position
            .checked_sub(1)
            .and_then(|index| self.products.get(index))
    }

    /// Resolve a shopper reference: a 1-based position first, then an id
    pub fn resolve(&self, reference: &str) -> Result<&Product, DomainError> {
        let reference = reference.trim();
        let by_position = reference
            .parse::<usize>()
            .ok()
            .and_then(|n| self.at_position(n));

        by_position
            .or_else(|| self.get(&ProductId::new(reference)))
            .ok_or_else(|| DomainError::UnknownProduct(reference.to_string()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::miss_can()
    }
}
