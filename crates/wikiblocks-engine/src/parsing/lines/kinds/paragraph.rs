use crate::{
    error::ParseError,
    parsing::{
        inline::parse_inline,
        scan::{line_end, next_line},
        sink::Sink,
        state::ParserState,
    },
};

/// Paragraph text: the fallback for lines no other rule claims.
pub struct Paragraph;

impl Paragraph {
    /// Opens a paragraph if none is open (closing any open lists) and
    /// parses the line's inline content into it.
    pub fn apply(line: &str, state: &mut ParserState, out: &mut Sink) -> Result<usize, ParseError> {
        state.format.paragraph_start(out)?;
        let eol = line_end(line, 0);
        if eol > 0 {
            parse_inline(&line[..eol], state, out)?;
        }
        Ok(next_line(line, 0))
    }
}
