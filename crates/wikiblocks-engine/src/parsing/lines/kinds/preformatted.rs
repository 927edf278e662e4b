use crate::{
    error::ParseError,
    parsing::{inline::parse_inline, sink::Sink, state::ParserState, tags},
};

/// Lines starting with a space, wrapped in `<pre>` as one run.
pub struct Preformatted;

impl Preformatted {
    pub const MARK: u8 = b' ';
    const CONTINUATION: &'static str = "\n ";

    /// Consumes every following line that also starts with a space. Each
    /// line loses its first space and keeps its newline.
    pub fn apply(line: &str, state: &mut ParserState, out: &mut Sink) -> Result<usize, ParseError> {
        let b = line.as_bytes();
        let (run_end, consumed) = (1..b.len())
            .find(|&i| b[i] == b'\n' && b.get(i + 1) != Some(&Self::MARK))
            .map_or((line.len(), line.len()), |i| (i, i + 1));

        state.format.paragraph_stop(out)?;
        let mut rest = line.get(1..run_end).unwrap_or("");
        if rest.is_empty() {
            return Ok(consumed);
        }

        out.push_str(tags::PRE_OPEN)?;
        while let Some(i) = rest.find(Self::CONTINUATION) {
            parse_inline(&rest[..=i], state, out)?;
            rest = &rest[i + Self::CONTINUATION.len()..];
        }
        if !rest.is_empty() {
            parse_inline(rest, state, out)?;
        }
        out.push_str(tags::PRE_CLOSE)?;
        Ok(consumed)
    }
}
