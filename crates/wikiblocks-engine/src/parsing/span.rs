/// A byte range `[start, end)` into the normalized input.
///
/// Stages never cut or rewrite the input; they pass spans around and slice
/// on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The text this span covers in `s`.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
