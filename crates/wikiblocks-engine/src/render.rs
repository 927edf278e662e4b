//! Consumers of a parsed block list.
//!
//! Skipped blocks are never rendered by either function.

use std::{fmt::Write, sync::OnceLock};

use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;

use crate::parsing::{Block, BlockKind};

/// One line per block, in the listing format of the reference test driver:
///
/// ```text
/// { type => 'header', level => '2', content => 'Title' }
/// ```
///
/// Newlines inside the content are shown as `\n`.
pub fn debug_listing(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks.iter().filter(|b| !b.skip) {
        let _ = write!(out, "{{ type => '{}',", block.kind.name());
        if block.level != 0 {
            let _ = write!(out, " level => '{}',", block.level);
        }
        let _ = writeln!(out, " content => '{}' }}", block.text.replace('\n', "\\n"));
    }
    out
}

/// Renders blocks back into a single HTML document.
///
/// Text blocks are already HTML and pass through untouched, less any empty
/// paragraph they end with. Everything the parser extracted is escaped on
/// the way out.
pub fn html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks.iter().filter(|b| !b.skip) {
        render_block(block, &mut out);
    }
    out
}

fn trailing_empty_paragraph() -> &'static Regex {
    static TRAILING: OnceLock<Regex> = OnceLock::new();
    TRAILING.get_or_init(|| {
        Regex::new(r"<p>[ \n]*</p>[ \n]*$").expect("Invalid trailing paragraph regex")
    })
}

fn render_block(block: &Block, out: &mut String) {
    let text = block.text.as_str();
    match block.kind {
        BlockKind::Text => {
            // left behind when a list or rule ends right before a header
            let end = trailing_empty_paragraph()
                .find(text)
                .map_or(text.len(), |m| m.start());
            out.push_str(&text[..end]);
        }
        BlockKind::Header => {
            let level = block.level.clamp(1, 4);
            let _ = write!(out, "<h{level}>{}</h{level}>", encode_text(text));
        }
        BlockKind::Link => {
            let (target, label) = text.split_once('|').unwrap_or((text, text));
            let _ = write!(
                out,
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(target),
                encode_text(label)
            );
        }
        BlockKind::Isbn => {
            let _ = write!(
                out,
                "<a href=\"isbn:{}\">ISBN {}</a>",
                encode_double_quoted_attribute(text),
                encode_text(text)
            );
        }
        BlockKind::RawText => out.push_str(&encode_text(text)),
        BlockKind::Template => {
            let name = block.opcode.as_deref().unwrap_or_default();
            let body = match (name.is_empty(), text.is_empty()) {
                (true, _) => format!("{{{{{text}}}}}"),
                (false, true) => format!("{{{{{name}}}}}"),
                (false, false) => format!("{{{{{name} {text}}}}}"),
            };
            let _ = write!(
                out,
                "<span class=\"template\" data-name=\"{}\">{}</span>",
                encode_double_quoted_attribute(name),
                encode_text(&body)
            );
        }
        BlockKind::Comment => {
            let _ = write!(out, "<!--{text}-->");
        }
        BlockKind::Unknown => out.push_str(&encode_text(text)),
    }
}
