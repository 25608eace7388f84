//! Product cards
//!
//! Text rendering of a catalog entry and the two card actions.

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use concierge_domain::{Catalog, Product};

/// Width descriptions are wrapped to
const CARD_WIDTH: usize = 64;

/// An action taken on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardIntent {
    /// "Pairing?": open the chat about this product
    AskPairing(String),
    /// "Add": no cart yet, acknowledged only
    Add(String),
}

impl CardIntent {
    /// Parse `/pairing <ref>` or `/add <ref>`.
    ///
    /// Returns `None` for other commands. A missing reference yields an
    /// empty one so the caller can report it.
    pub fn parse(command: &str, argument: &str) -> Option<Self> {
        let reference = argument.trim().to_string();
        match command {
            "/pairing" | "/p" => Some(CardIntent::AskPairing(reference)),
            "/add" | "/a" => Some(CardIntent::Add(reference)),
            _ => None,
        }
    }

    pub fn reference(&self) -> &str {
        match self {
            CardIntent::AskPairing(r) | CardIntent::Add(r) => r,
        }
    }
}

/// Render one card. `position` is the 1-based number the shopper types.
pub fn render_card(position: usize, product: &Product) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        format!("[{}]", position).dimmed(),
        product.name().bold()
    ));
    output.push_str(&ConsoleFormatter::indent(
        &wrap(product.description(), CARD_WIDTH),
        "    ",
    ));
    output.push('\n');

    if let Some(notes) = product.pairing_notes() {
        output.push_str(&format!("    {} {}\n", "Pairs with:".cyan(), notes));
    }

    output.push_str(&format!("    {}\n", product.image_url().dimmed()));
    output.push_str(&format!(
        "    {}  {}\n",
        format!("/pairing {}", position).yellow(),
        format!("/add {}", position).dimmed()
    ));

    output
}

/// Render the whole catalog, in display order
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut output = ConsoleFormatter::catalog_intro();
    for (index, product) in catalog.products().iter().enumerate() {
        output.push('\n');
        output.push_str(&render_card(index + 1, product));
    }
    output
}

/// Acknowledgement printed for "Add"
pub fn render_add_notice(product: &Product) -> String {
    ConsoleFormatter::notice(&format!(
        "{} noted. Online ordering is coming soon.",
        product.name()
    ))
}

fn wrap(text: &str, width: usize) -> String {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::markdown::sanitize;

    #[test]
    fn test_parse_intents() {
        assert_eq!(
            CardIntent::parse("/pairing", " 2 "),
            Some(CardIntent::AskPairing("2".to_string()))
        );
        assert_eq!(
            CardIntent::parse("/add", "tuna-sweet-potato"),
            Some(CardIntent::Add("tuna-sweet-potato".to_string()))
        );
        assert_eq!(CardIntent::parse("/chef", ""), None);
        assert_eq!(
            CardIntent::parse("/p", "").map(|i| i.reference().to_string()),
            Some(String::new())
        );
    }

    #[test]
    fn test_render_card_shows_product() {
        let catalog = Catalog::miss_can();
        let product = &catalog.products()[0];
        let card = sanitize(&render_card(1, product));

        assert!(card.starts_with("[1] "));
        assert!(card.contains(product.name()));
        assert!(card.contains(product.image_url()));
        assert!(card.contains("/pairing 1"));
        assert!(card.contains("/add 1"));
    }

    #[test]
    fn test_render_card_with_notes() {
        let product = Catalog::miss_can().products()[1]
            .clone()
            .with_pairing_notes("Vinho Verde");
        let card = sanitize(&render_card(2, &product));
        assert!(card.contains("Pairs with: Vinho Verde"));
    }

    #[test]
    fn test_render_catalog_lists_every_product() {
        let catalog = Catalog::miss_can();
        let text = sanitize(&render_catalog(&catalog));
        for product in catalog.products() {
            assert!(text.contains(product.name()));
        }
        assert!(text.contains("[4]"));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("aa bb cc", 5), "aa bb\ncc");
        assert_eq!(wrap("", 5), "");
    }
}
