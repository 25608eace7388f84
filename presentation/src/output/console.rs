//! Console chrome for the storefront

use colored::Colorize;

/// Formats the non-chat parts of the storefront for the console
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Brand banner shown when the storefront starts
    pub fn banner() -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Miss Can"));
        output.push('\n');
        output.push_str(&format!("{:^60}\n", "Est. 2011 • Portugal".dimmed()));
        output.push_str(&format!("{:^60}\n\n", "From Portugal, With Love.".bold()));
        output.push_str(
            "Miss Can isn't just a tinned fish brand; it's a celebration of\n\
             Portuguese heritage, ethical fishing, and the craft of canning.\n",
        );
        output.push_str(&Self::footer());

        output
    }

    /// Heading above the product cards
    pub fn catalog_intro() -> String {
        format!(
            "{}\n{}\n",
            Self::section_header("Explore Portuguese Flavors"),
            "Each tin tells a story of the sea. Sustainable, artisanal, and packed by hand."
                .dimmed()
        )
    }

    /// Header of the chat panel
    pub fn chat_header(context_name: Option<&str>) -> String {
        let subtitle = match context_name {
            Some(name) => format!("Virtual Concierge • {}", name),
            None => "Virtual Concierge".to_string(),
        };
        format!(
            "\n{} {}\n{}\n",
            "The Kitchen".yellow().bold(),
            subtitle.dimmed(),
            "-".repeat(40)
        )
    }

    /// A neutral notice line
    pub fn notice(text: &str) -> String {
        format!("{} {}", "->".cyan(), text)
    }

    /// An error line
    pub fn error(text: &str) -> String {
        format!("{} {}", "Error:".red().bold(), text)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    pub fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::markdown::sanitize;

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "  "), "  a\n  b");
    }

    #[test]
    fn test_chat_header_names_product() {
        let header = sanitize(&ConsoleFormatter::chat_header(Some("Sardines in Olive Oil")));
        assert!(header.contains("The Kitchen"));
        assert!(header.contains("Sardines in Olive Oil"));

        let header = sanitize(&ConsoleFormatter::chat_header(None));
        assert!(header.contains("Virtual Concierge"));
    }

    #[test]
    fn test_banner_mentions_brand() {
        let banner = sanitize(&ConsoleFormatter::banner());
        assert!(banner.contains("Miss Can"));
        assert!(banner.contains("From Portugal, With Love."));
    }
}
