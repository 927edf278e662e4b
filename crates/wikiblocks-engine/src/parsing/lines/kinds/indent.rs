use crate::{
    error::ParseError,
    parsing::{
        inline::parse_inline,
        scan::{line_end, next_line},
        sink::Sink,
        state::ParserState,
        tags,
    },
};

/// `:` indentation, one level per colon.
pub struct Indent;

impl Indent {
    pub const MARK: u8 = b':';

    pub fn apply(line: &str, state: &mut ParserState, out: &mut Sink) -> Result<usize, ParseError> {
        let depth = line.bytes().take_while(|&b| b == Self::MARK).count();
        let body = &line[depth..line_end(line, depth)];

        state.format.paragraph_stop(out)?;
        if !body.is_empty() {
            for _ in 0..depth {
                out.push_str(tags::INDENT_OPEN)?;
            }
            parse_inline(body, state, out)?;
            for _ in 0..depth {
                out.push_str(tags::INDENT_CLOSE)?;
            }
        }
        Ok(next_line(line, depth))
    }
}
