//! # Parsing
//!
//! Wiki markup to HTML in two phases over each line:
//!
//! 1. **Global tags** (`global`): templates, links, headings, comments and
//!    `<nowiki>` spans are extracted into blocks and replaced by
//!    placeholders, producing a composite line.
//! 2. **Line dispatch** (`lines`) and **inline parsing** (`inline`) render
//!    the composite line to HTML, sharing the formatting state in `state`.
//!
//! All output lands in one buffer, which is finally split on the
//! placeholders into an ordered list of [`Block`]s.

pub mod global;
pub mod grammar;
pub mod inline;
pub mod line_endings;
pub mod lines;
pub mod options;
pub mod refs;
pub mod scan;
pub mod sink;
pub mod snapshot;
pub mod span;
pub mod state;
pub mod tags;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use log::{debug, warn};
use regex::Regex;

use crate::error::ParseError;

pub use grammar::Grammar;
pub use options::{CommentMode, HeaderMode, ParseOptions};
pub use refs::{Block, BlockKind, RefTable, Separator};

use sink::Sink;
use state::ParserState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<Block>,
    /// The placeholder token used for this parse. It never occurs in the
    /// input nor in any text block.
    pub separator: Separator,
    /// Number of blocks registered while parsing.
    pub extracted: usize,
    /// For each non-text block, in document order, the index it was
    /// registered under.
    pub order: Vec<usize>,
}

/// Parses `input` with default options.
pub fn parse(input: &str) -> Result<Vec<Block>, ParseError> {
    parse_with_options(input, &ParseOptions::default())
}

pub fn parse_with_options(input: &str, options: &ParseOptions) -> Result<Vec<Block>, ParseError> {
    parse_document(input, options).map(|doc| doc.blocks)
}

/// Parses `input` into blocks, in document order.
///
/// Separator candidates absent from the input are tried in turn. Removing a
/// comment or an empty template can join the text around it into something
/// that looks like a placeholder; when that happens the pass is thrown away
/// and rerun with the next candidate.
pub fn parse_document(input: &str, options: &ParseOptions) -> Result<ParsedDoc, ParseError> {
    let text = line_endings::normalize(input);
    let grammar = Grammar::new(options);

    for separator in Separator::candidates(&text, options.separator_attempts) {
        debug!(
            "parsing {} bytes with separator {}",
            text.len(),
            separator.token()
        );
        let (html, refs) = render(&text, &grammar, separator.clone())?;
        match reassemble(html.as_str(), &separator, &refs)? {
            Some((mut blocks, order)) => {
                elide_empty_paragraphs(&mut blocks);
                debug!(
                    "parsed {} blocks ({} extracted)",
                    blocks.len(),
                    refs.len()
                );
                return Ok(ParsedDoc {
                    blocks,
                    separator,
                    extracted: refs.len(),
                    order,
                });
            }
            None => warn!(
                "separator {} appeared in spliced text, retrying",
                separator.token()
            ),
        }
    }

    Err(ParseError::SeparatorCollision {
        attempts: options.separator_attempts,
    })
}

/// Runs the line loop, returning the rendered buffer and the extracted blocks.
fn render(
    text: &str,
    grammar: &Grammar,
    separator: Separator,
) -> Result<(Sink, RefTable), ParseError> {
    let mut state = ParserState::new(separator);
    let mut out = Sink::with_capacity(text.len())?;
    let mut ends = global::EndCache::new(grammar.global.len());
    let mut pos = 0;

    while pos < text.len() {
        if text.as_bytes()[pos] == b'\n' {
            // blank line
            state.format.paragraph_stop(&mut out)?;
            pos += 1;
            continue;
        }
        pos = match global::find(&grammar.global, &mut ends, text, pos, pos) {
            None => pos + lines::dispatch(&text[pos..], grammar, &mut state, &mut out)?,
            Some(first) => {
                let (line, next) =
                    global::splice_line(grammar, text, pos, first, &mut ends, &mut state)?;
                lines::dispatch(line.as_str(), grammar, &mut state, &mut out)?;
                next
            }
        };
        out.push_str(tags::NEWLINE)?;
    }

    state.format.finish(&mut out)?;
    Ok((out, state.refs))
}

/// Splits `html` on placeholders into text blocks and copies of the
/// extracted blocks they stand for, along with the registration index of
/// each placeholder in the order met.
///
/// Returns `None` if the separator token occurs anywhere other than in a
/// well-formed placeholder for a registered block, or if a placeholder
/// shows up twice.
fn reassemble(
    html: &str,
    separator: &Separator,
    refs: &RefTable,
) -> Result<Option<(Vec<Block>, Vec<usize>)>, ParseError> {
    let mut blocks = RefTable::new();
    let mut seen = vec![false; refs.len()];
    let mut order = Vec::with_capacity(refs.len());
    let mut rest = html;

    while let Some(at) = rest.find(separator.token()) {
        let Some((index, len)) = separator.decode(&rest[at..]) else {
            return Ok(None);
        };
        let Some(block) = refs.get(index) else {
            return Ok(None);
        };
        if std::mem::replace(&mut seen[index], true) {
            return Ok(None);
        }
        blocks.register(Block::text(&rest[..at]))?;
        blocks.register(block.clone())?;
        order.push(index);
        rest = &rest[at + len..];
    }
    if !rest.is_empty() {
        blocks.register(Block::text(rest))?;
    }
    Ok(Some((blocks.into_blocks(), order)))
}

fn empty_paragraph() -> &'static Regex {
    static EMPTY_PARAGRAPH: OnceLock<Regex> = OnceLock::new();
    EMPTY_PARAGRAPH.get_or_init(|| {
        Regex::new(r"^[ \n]*<p>[ \n]*</p>[ \n]*$").expect("Invalid empty paragraph regex")
    })
}

/// Whether a text block carries nothing worth rendering.
pub fn is_empty_paragraph(text: &str) -> bool {
    text.is_empty() || empty_paragraph().is_match(text)
}

/// Marks empty text blocks as skipped. Nothing is removed, so indices are
/// unchanged.
fn elide_empty_paragraphs(blocks: &mut [Block]) {
    for block in blocks
        .iter_mut()
        .filter(|b| b.kind == BlockKind::Text && is_empty_paragraph(&b.text))
    {
        block.skip = true;
    }
}
