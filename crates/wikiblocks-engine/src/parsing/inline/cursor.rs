use super::rules::InlineRule;

/// A cursor over one line of inline content.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Everything from the cursor to the end of the line.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Advances by `n` bytes, stopping at the end of the line.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.s.len());
    }

    /// Locates the earliest token at or after the cursor.
    ///
    /// Returns the byte offset of the token relative to the cursor and the
    /// rule that matched there. When several rules match at the same offset
    /// the first one in `rules` wins.
    pub fn next_token(&self, rules: &'static [InlineRule]) -> Option<(usize, &'static InlineRule)> {
        let rest = self.rest().as_bytes();
        (0..rest.len()).find_map(|at| {
            rules
                .iter()
                .find(|rule| rule.matches(rest, at))
                .map(|rule| (at, rule))
        })
    }
}
