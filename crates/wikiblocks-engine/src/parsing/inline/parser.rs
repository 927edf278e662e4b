use crate::{
    error::ParseError,
    parsing::{
        refs::{Block, BlockKind},
        sink::Sink,
        state::ParserState,
        tags,
    },
};

use super::{
    cursor::Cursor,
    kinds::{Isbn, Markup, Quotes},
    rules::{INLINE_RULES, InlineKind, InlineRule, TagOutcome},
};

/// Renders one line of inline content into `out`.
///
/// Text between tokens is written with `<` and `>` escaped. Formatting state
/// carries over in `state`, so a bold opened here may be closed on a later
/// line.
pub fn parse_inline(
    line: &str,
    state: &mut ParserState,
    out: &mut Sink,
) -> Result<(), ParseError> {
    let mut cur = Cursor::new(line);

    while !cur.eof() {
        let Some((at, rule)) = cur.next_token(INLINE_RULES) else {
            out.push_escaped(cur.rest())?;
            break;
        };
        out.push_escaped(&cur.rest()[..at])?;
        cur.bump_n(at);

        let tag = cur.rest();
        let advance = match apply(rule, tag, state, out)? {
            TagOutcome::Token => rule.token.len(),
            TagOutcome::Consumed(n) => n.max(rule.token.len()),
            TagOutcome::Rejected => {
                out.push_escaped(&tag[..rule.token.len()])?;
                rule.token.len()
            }
        };
        cur.bump_n(advance);
    }
    Ok(())
}

/// Runs the handler for `rule`. `tag` starts at the matched token and runs
/// to the end of the line.
fn apply(
    rule: &InlineRule,
    tag: &str,
    state: &mut ParserState,
    out: &mut Sink,
) -> Result<TagOutcome, ParseError> {
    let format = &mut state.format;
    match rule.kind {
        InlineKind::BoldItalic => {
            let order = Quotes::nesting(&tag[rule.token.len()..]);
            format.toggle_bold_italic(order, out)?;
        }
        InlineKind::Bold => format.toggle_bold(out)?,
        InlineKind::Italic => format.toggle_italic(out)?,
        InlineKind::BoldOpen => format.bold_on(out)?,
        InlineKind::ItalicOpen => format.italic_on(out)?,
        InlineKind::BoldClose => format.bold_off(out)?,
        InlineKind::ItalicClose => format.italic_off(out)?,
        InlineKind::LineBreak => {
            out.push_str(tags::BREAK)?;
            return Ok(TagOutcome::Consumed(Markup::tag_len(tag)));
        }
        InlineKind::ParagraphOpen => {
            format.paragraph_stop(out)?;
            format.paragraph_start(out)?;
        }
        InlineKind::ParagraphClose => format.paragraph_stop(out)?,
        InlineKind::Isbn => {
            let Some((value, len)) = Isbn::scan(tag) else {
                return Ok(TagOutcome::Rejected);
            };
            state.emit_ref(Block::new(BlockKind::Isbn, value), out)?;
            return Ok(TagOutcome::Consumed(len));
        }
        InlineKind::Passthrough => {
            let len = Markup::tag_len(tag);
            out.push_str(&tag[..len])?;
            return Ok(TagOutcome::Consumed(len));
        }
    }
    Ok(TagOutcome::Token)
}
