//! HTML emitted by the line and inline parsers.
//!
//! All markup lives here; handlers refer to these constants and never spell
//! out tags themselves.

pub const PARAGRAPH_OPEN: &str = "<p>";
pub const PARAGRAPH_CLOSE: &str = "</p>\n";
/// Spliced ahead of paragraph-breaking global tags; the inline parser turns
/// it into a paragraph close.
pub const PARAGRAPH_BREAK: &str = "</p>";
pub const NEWLINE: &str = "\n";

pub const RULE: &str = "<hr />";
pub const BREAK: &str = "<br />";

pub const INDENT_OPEN: &str = "<dl><dd>";
pub const INDENT_CLOSE: &str = "</dd></dl>";

pub const DEFINITION_OPEN: &str = "<dl>";
pub const DEFINITION_CLOSE: &str = "</dl>";
pub const TERM_OPEN: &str = "<dt>";
pub const TERM_CLOSE: &str = "</dt>";
pub const DESCRIPTION_OPEN: &str = "<dd>";
pub const DESCRIPTION_CLOSE: &str = "</dd>";

pub const ORDERED_OPEN: &str = "<ol>";
pub const ORDERED_CLOSE: &str = "</ol>\n";
pub const UNORDERED_OPEN: &str = "<ul>";
pub const UNORDERED_CLOSE: &str = "</ul>\n";
pub const ITEM_OPEN: &str = "<li>";
pub const ITEM_CLOSE: &str = "</li>";

pub const PRE_OPEN: &str = "<pre>";
pub const PRE_CLOSE: &str = "\n</pre>";

pub const BOLD_OPEN: &str = "<b>";
pub const BOLD_CLOSE: &str = "</b>";
pub const ITALIC_OPEN: &str = "<i>";
pub const ITALIC_CLOSE: &str = "</i>";

/// Opening and closing heading tags for levels 1 to 4.
pub fn heading(level: u8) -> (&'static str, &'static str) {
    match level {
        1 => ("<h1>", "</h1>"),
        2 => ("<h2>", "</h2>"),
        3 => ("<h3>", "</h3>"),
        _ => ("<h4>", "</h4>"),
    }
}
