//! Text processing utilities.
//!
//! This module turns the HTML bodies the job listings API serves into plain
//! lines the terminal can display.

use log::*;
use regex::{Captures, Regex};
use std::sync::OnceLock;

struct Patterns {
    hidden: Regex,
    line_breaks: Regex,
    list_items: Regex,
    block_ends: Regex,
    tags: Regex,
    entities: Regex,
    spaces: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Patterns {
            hidden: Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->")?,
            line_breaks: Regex::new(r"(?i)<br\s*/?>")?,
            list_items: Regex::new(r"(?i)<li\b[^>]*>")?,
            block_ends: Regex::new(r"(?i)</(p|div|h[1-6]|ul|ol|li|tr|table|blockquote)\s*>|<(p|div|h[1-6]|ul|ol|tr|table|blockquote)\b[^>]*>")?,
            tags: Regex::new(r"<[^>]*>")?,
            entities: Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);")?,
            spaces: Regex::new(r"[ \t\x{a0}]+")?,
        })
    }
}

fn patterns() -> Option<&'static Patterns> {
    static PATTERNS: OnceLock<Option<Patterns>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| match Patterns::compile() {
            Ok(patterns) => Some(patterns),
            Err(e) => {
                warn!("Failed to compile HTML patterns: {}", e);
                None
            }
        })
        .as_ref()
}

/// Render an HTML fragment as display lines.
///
/// The markup must come from the job listings API, which is trusted to serve
/// well-formed job descriptions. Tags are dropped rather than sanitized, so
/// this must not be used on arbitrary user-supplied HTML. Control characters
/// are removed so the text cannot drive the terminal.
///
/// Paragraphs, headings and list items start new lines, list items are
/// bulleted, entities are decoded and runs of blank lines collapse to one.
pub fn render_trusted_html(html: &str) -> Vec<String> {
    let text = match patterns() {
        Some(patterns) => {
            let text = patterns.hidden.replace_all(html, "");
            let text = patterns.line_breaks.replace_all(&text, "\n");
            let text = patterns.list_items.replace_all(&text, "\n• ");
            let text = patterns.block_ends.replace_all(&text, "\n");
            let text = patterns.tags.replace_all(&text, "");
            let text = decode_entities(&patterns.entities, &text);
            patterns.spaces.replace_all(&text, " ").into_owned()
        }
        None => html.to_string(),
    };

    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        let line: String = line.chars().filter(|c| !c.is_control()).collect();
        let line = line.trim();
        if line.is_empty() && lines.last().map_or(true, |last| last.is_empty()) {
            continue;
        }
        lines.push(line.to_string());
    }
    while lines.last().map_or(false, |last| last.is_empty()) {
        lines.pop();
    }
    lines
}

/// Decode character references in a single pass so decoded text is never
/// decoded again. Unknown names are left as written.
///
fn decode_entities(entities: &Regex, text: &str) -> String {
    entities
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = match name.strip_prefix('#') {
                Some(code) => numeric_entity(code),
                None => named_entity(name),
            };
            decoded
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn numeric_entity(code: &str) -> Option<char> {
    let value = match code.strip_prefix(|c: char| c == 'x' || c == 'X') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => code.parse::<u32>().ok()?,
    };
    char::from_u32(value)
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "rsquo" => '\u{2019}',
        "lsquo" => '\u{2018}',
        "rdquo" => '\u{201d}',
        "ldquo" => '\u{201c}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "bull" => '\u{2022}',
        _ => return None,
    };
    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_become_lines() {
        let html = "<p>We are hiring.</p><p>Join <strong>us</strong>!</p>";
        assert_eq!(render_trusted_html(html), vec!["We are hiring.", "", "Join us!"]);
    }

    #[test]
    fn test_lists_are_bulleted() {
        let html = "<h3>Requirements</h3><ul><li>Rust</li><li>Tokio</li></ul>";
        assert_eq!(
            render_trusted_html(html),
            vec!["Requirements", "", "• Rust", "", "• Tokio"]
        );
    }

    #[test]
    fn test_line_breaks() {
        let html = "First line<br>Second line<br/>Third<BR />";
        assert_eq!(
            render_trusted_html(html),
            vec!["First line", "Second line", "Third"]
        );
    }

    #[test]
    fn test_entities_decoded() {
        let html = "<p>R&amp;D &lt;team&gt; &quot;remote&quot; &#39;first&#39; caf&#xe9;</p>";
        assert_eq!(
            render_trusted_html(html),
            vec!["R&D <team> \"remote\" 'first' café"]
        );
    }

    #[test]
    fn test_escaped_ampersand_not_double_decoded() {
        assert_eq!(render_trusted_html("&amp;lt;"), vec!["&lt;"]);
    }

    #[test]
    fn test_numeric_ampersand_not_double_decoded() {
        assert_eq!(render_trusted_html("&#38;lt;b&#38;gt;"), vec!["&lt;b&gt;"]);
        assert_eq!(render_trusted_html("&#x26;amp; &unknown;"), vec!["&amp; &unknown;"]);
    }

    #[test]
    fn test_scripts_and_comments_dropped() {
        let html = "<p>Visible</p><script>alert('x')</script><!-- hidden --><style>p{}</style>";
        assert_eq!(render_trusted_html(html), vec!["Visible"]);
    }

    #[test]
    fn test_control_characters_removed() {
        let html = "<p>Bold\u{1b}[1m text</p>";
        assert_eq!(render_trusted_html(html), vec!["Bold[1m text"]);
    }

    #[test]
    fn test_plain_text_and_empty_input() {
        assert_eq!(render_trusted_html("  just   text "), vec!["just text"]);
        assert!(render_trusted_html("").is_empty());
        assert!(render_trusted_html("<div></div>").is_empty());
    }
}
