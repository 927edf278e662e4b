//! Handlers turning the interior of a matched global tag into a block.
//!
//! Each handler registers at most one block and writes its placeholder into
//! the composite line. Interiors that trim down to nothing produce no block.

use crate::{
    error::ParseError,
    parsing::{
        options::CommentMode,
        refs::{Block, BlockKind},
        sink::Sink,
        state::ParserState,
    },
};

use super::rules::GlobalKind;

pub fn handle(
    kind: GlobalKind,
    interior: &str,
    comments: CommentMode,
    state: &mut ParserState,
    line: &mut Sink,
) -> Result<(), ParseError> {
    match kind {
        GlobalKind::NoWiki => state.emit_ref(Block::new(BlockKind::RawText, interior), line),
        GlobalKind::Comment => match comments {
            CommentMode::Drop => Ok(()),
            CommentMode::Block => state.emit_ref(Block::new(BlockKind::Comment, interior), line),
        },
        GlobalKind::Template => {
            let flat = interior.replace('\n', " ");
            let body = trim_spaces(&flat);
            if body.is_empty() {
                return Ok(());
            }
            let (opcode, content) = split_opcode(body);
            state.emit_ref(Block::template(opcode.map(str::to_owned), content), line)
        }
        GlobalKind::Link => {
            let target = trim_spaces(interior);
            if target.is_empty() {
                return Ok(());
            }
            state.emit_ref(Block::new(BlockKind::Link, target), line)
        }
        GlobalKind::Header(level) => {
            let title = trim_spaces(interior);
            if title.is_empty() {
                return Ok(());
            }
            state.emit_ref(Block::header(level, title), line)
        }
    }
}

/// Trims spaces only; tabs and other whitespace are content.
fn trim_spaces(s: &str) -> &str {
    s.trim_matches(' ')
}

/// Splits a template body into its name and arguments.
///
/// The name runs up to the first space. An `=` or `|` before any space
/// means the body has no name and is all content.
fn split_opcode(body: &str) -> (Option<&str>, &str) {
    for (i, b) in body.bytes().enumerate() {
        match b {
            b' ' => return (Some(&body[..i]), body[i..].trim_start_matches(' ')),
            b'=' | b'|' => return (None, body),
            _ => {}
        }
    }
    (Some(body), "")
}
