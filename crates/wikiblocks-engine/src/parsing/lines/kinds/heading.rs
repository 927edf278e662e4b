use crate::{
    error::ParseError,
    parsing::{
        inline::parse_inline,
        scan::{line_end, next_line, starts_with},
        sink::Sink,
        state::ParserState,
        tags,
    },
};

/// `== Heading ==` rendered in place, used when headings are not extracted
/// as blocks.
pub struct Heading;

impl Heading {
    pub const MARK: u8 = b'=';
    const RUNS: &'static str = "====";
    pub const MAX_LEVEL: usize = 4;

    /// Declines when no closing run follows, or when the line is nothing but
    /// a run of `=`.
    pub fn apply(
        line: &str,
        state: &mut ParserState,
        out: &mut Sink,
    ) -> Result<Option<usize>, ParseError> {
        let eol = line_end(line, 0);
        let body = &line.as_bytes()[..eol];
        let level = body
            .iter()
            .take_while(|&&b| b == Self::MARK)
            .count()
            .min(Self::MAX_LEVEL);
        let run = &Self::RUNS[..level];

        let Some(close) = Self::closing_run(body, level, run) else {
            return Ok(None);
        };
        if close == level {
            return Ok(None);
        }

        state.format.paragraph_stop(out)?;
        state.format.close_lists(out)?;
        let (open_tag, close_tag) = tags::heading(level as u8);
        out.push_str(open_tag)?;
        parse_inline(&line[level..close], state, out)?;
        out.push_str(close_tag)?;

        let tail = &line[close + level..eol];
        if !tail.is_empty() {
            parse_inline(tail, state, out)?;
        }
        Ok(Some(next_line(line, 0)))
    }

    /// Start of the first `run` after the opening one, pushed as far right
    /// as a longer run of `=` allows.
    fn closing_run(body: &[u8], from: usize, run: &str) -> Option<usize> {
        let mut at = (from..body.len()).find(|&i| starts_with(body, i, run))?;
        while starts_with(body, at + 1, run) {
            at += 1;
        }
        Some(at)
    }
}
