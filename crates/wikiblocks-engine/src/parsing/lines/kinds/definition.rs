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

/// `;term:definition` lists.
pub struct Definition;

impl Definition {
    pub const MARK: u8 = b';';
    /// Separates the term from its definition.
    pub const SPLIT: char = ':';

    /// Either half may be empty. An empty term drops the `<dt>`, an empty
    /// definition drops the `<dd>`, and with both empty nothing is written.
    pub fn apply(line: &str, state: &mut ParserState, out: &mut Sink) -> Result<usize, ParseError> {
        let eol = line_end(line, 1);
        let body = &line[1..eol];
        let (term, definition) = match body.find(Self::SPLIT) {
            Some(i) => (&body[..i], &body[i + 1..]),
            None => (body, ""),
        };

        state.format.paragraph_stop(out)?;
        if term.is_empty() && definition.is_empty() {
            return Ok(next_line(line, 1));
        }

        out.push_str(tags::DEFINITION_OPEN)?;
        if !term.is_empty() {
            out.push_str(tags::TERM_OPEN)?;
            parse_inline(term, state, out)?;
            out.push_str(tags::TERM_CLOSE)?;
        }
        if !definition.is_empty() {
            out.push_str(tags::DESCRIPTION_OPEN)?;
            parse_inline(definition, state, out)?;
            out.push_str(tags::DESCRIPTION_CLOSE)?;
        }
        out.push_str(tags::DEFINITION_CLOSE)?;
        Ok(next_line(line, 1))
    }
}
