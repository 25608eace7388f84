//! Markdown to terminal text
//!
//! Bot replies arrive as markdown. [`render_markdown`] turns the subset the
//! chef uses (headings, emphasis, inline code, lists, quotes, fenced code,
//! rules) into styled terminal text. Model text is passed through
//! [`sanitize`] first so it cannot drive the terminal.

use colored::Colorize;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// CSI, OSC and two-byte escape sequences
static ANSI_ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \x1b\[[0-9;?]*[\x20-\x2f]*[\x40-\x7e]   # CSI
        | \x1b\][^\x07\x1b]*(?:\x07|\x1b\\)     # OSC
        | \x1b[\x40-\x5f]                       # two-byte escapes
        ",
    )
    .expect("ANSI regex pattern is valid")
});

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*?)\s*#*\s*$").expect("heading regex is valid"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)[-*+]\s+(.*)$").expect("bullet regex is valid"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)(\d+)[.)]\s+(.*)$").expect("numbered regex is valid"));

static QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*>\s?(.*)$").expect("quote regex is valid"));

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-{3,}|\*{3,}|_{3,})\s*$").expect("rule regex is valid"));

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(```|~~~)").expect("fence regex is valid"));

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span regex is valid"));

/// Strong spans may contain single-star emphasis
static STRONG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(\S(?:.*?\S)?)\*\*|__(\S(?:.*?\S)?)__").expect("strong regex is valid")
});

static EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^*\s][^*]*?)\*|\b_([^_]+?)_\b").expect("emphasis regex is valid")
});

/// Strip escape sequences and control characters, keeping newlines and tabs.
pub fn sanitize(text: &str) -> String {
    ANSI_ESCAPE_PATTERN
        .replace_all(text, "")
        .chars()
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .collect()
}

/// Render markdown for the terminal.
pub fn render_markdown(text: &str) -> String {
    let clean = sanitize(text);
    let mut out = Vec::new();
    let mut in_code = false;

    for line in clean.lines() {
        if FENCE.is_match(line) {
            in_code = !in_code;
            continue;
        }

        if in_code {
            out.push(format!("  {} {}", "│".dimmed(), line.green()));
            continue;
        }

        out.push(render_line(line));
    }

    out.join("\n")
}

fn render_line(line: &str) -> String {
    if let Some(caps) = HEADING.captures(line) {
        let title = render_inline(&caps[2]);
        return if caps[1].len() <= 2 {
            title.cyan().bold().underline().to_string()
        } else {
            title.cyan().bold().to_string()
        };
    }

    if RULE.is_match(line) {
        return "─".repeat(40).dimmed().to_string();
    }

    if let Some(caps) = BULLET.captures(line) {
        return format!("{}  • {}", &caps[1], render_inline(&caps[2]));
    }

    if let Some(caps) = NUMBERED.captures(line) {
        return format!("{}  {}. {}", &caps[1], &caps[2], render_inline(&caps[3]));
    }

    if let Some(caps) = QUOTE.captures(line) {
        return format!("{} {}", "│".dimmed(), render_inline(&caps[1]).italic());
    }

    render_inline(line)
}

/// Inline spans. Code spans are left untouched by emphasis.
fn render_inline(text: &str) -> String {
    let mut out = String::new();
    let mut last = 0;

    for caps in CODE_SPAN.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&emphasis(&text[last..whole.start()]));
        out.push_str(&caps[1].yellow().to_string());
        last = whole.end();
    }
    out.push_str(&emphasis(&text[last..]));
    out
}

fn emphasis(text: &str) -> String {
    let strong = STRONG.replace_all(text, |caps: &Captures| {
        let inner = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        italics(inner).bold().to_string()
    });

    italics(&strong)
}

fn italics(text: &str) -> String {
    EMPHASIS
        .replace_all(text, |caps: &Captures| {
            let inner = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            inner.italic().to_string()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rendered text with styling removed
    fn plain(markdown: &str) -> String {
        sanitize(&render_markdown(markdown))
    }

    #[test]
    fn test_sanitize_strips_escapes_and_controls() {
        let text = "\x1b[31mred\x1b[0m \x1b]0;title\x07bell\x07 tab\tok\r\n";
        assert_eq!(sanitize(text), "red bell tab\tok\n");
    }

    #[test]
    fn test_headings_and_emphasis() {
        let out = plain("## A **Traditional** Toast\nServe *warm* with __lemon__.");
        assert_eq!(out, "A Traditional Toast\nServe warm with lemon.");
    }

    #[test]
    fn test_nested_emphasis() {
        assert_eq!(plain("**bold *it* bold**"), "bold it bold");
        assert_eq!(plain("*a* then **b** then __c *d*__"), "a then b then c d");
    }

    #[test]
    fn test_lists() {
        let out = plain("- Sardines\n* Bread\n1. Toast the bread\n2) Add the fish");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  • Sardines");
        assert_eq!(lines[1], "  • Bread");
        assert_eq!(lines[2], "  1. Toast the bread");
        assert_eq!(lines[3], "  2. Add the fish");
    }

    #[test]
    fn test_code_is_left_alone() {
        let out = plain("Use `2*3*oil` here\n```\nlet x = **y**;\n```");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Use 2*3*oil here");
        assert!(lines[1].ends_with("let x = **y**;"));
        assert!(!out.contains("```"));
    }

    #[test]
    fn test_quote_and_rule() {
        let out = plain("> Bom apetite\n---");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "│ Bom apetite");
        assert!(lines[1].chars().all(|c| c == '─'));
    }

    #[test]
    fn test_injected_escapes_do_not_survive() {
        let out = render_markdown("plain \x1b[2Jclear\x1b]8;;http://x\x07link");
        assert!(!out.contains("\x1b[2J"));
        assert!(!out.contains("\x1b]8"));
        assert_eq!(sanitize(&out), "plain clearlink");
    }

    #[test]
    fn test_snake_case_words_are_not_italic() {
        assert_eq!(plain("olive_oil_tin"), "olive_oil_tin");
    }
}
