use crate::{
    error::ParseError,
    parsing::{
        grammar::Grammar,
        lines::dispatch,
        scan::{line_end, next_line},
        sink::Sink,
        state::ParserState,
        tags,
    },
};

/// `----` horizontal rule.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const PREFIX: &'static str = "---";
    pub const DASH: u8 = b'-';

    /// Closes the paragraph and lists and emits the rule. Text after the
    /// dashes is parsed as a line of its own.
    pub fn apply(
        line: &str,
        grammar: &Grammar,
        state: &mut ParserState,
        out: &mut Sink,
    ) -> Result<usize, ParseError> {
        state.format.paragraph_stop(out)?;
        state.format.close_lists(out)?;
        out.push_str(tags::RULE)?;

        let dashes = line.bytes().take_while(|&b| b == Self::DASH).count();
        let tail = &line[dashes..line_end(line, dashes)];
        if !tail.is_empty() {
            dispatch(tail, grammar, state, out)?;
        }
        Ok(next_line(line, dashes))
    }
}
