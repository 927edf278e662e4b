/// HTML-like tags the inline parser interprets.
pub struct Markup;

impl Markup {
    pub const BOLD_OPEN: &'static str = "<b>";
    pub const ITALIC_OPEN: &'static str = "<i>";
    pub const BOLD_CLOSE: &'static str = "</b>";
    pub const ITALIC_CLOSE: &'static str = "</i>";
    /// Matches `<br>`, `<br/>`, `<br />` and friends.
    pub const LINE_BREAK: &'static str = "<br";
    pub const PARAGRAPH_OPEN: &'static str = "<p>";
    pub const PARAGRAPH_CLOSE: &'static str = "</p>";
    pub const TAG_END: char = '>';

    /// Length of the tag starting at the beginning of `s`: through the
    /// first `>`, or all of `s` when there is none.
    pub fn tag_len(s: &str) -> usize {
        s.find(Self::TAG_END).map_or(s.len(), |i| i + 1)
    }
}

/// Container tags copied to the output exactly as written.
pub struct Passthrough;

impl Passthrough {
    pub const CENTER_OPEN: &'static str = "<center>";
    pub const CENTER_CLOSE: &'static str = "</center>";
    pub const BLOCKQUOTE_OPEN: &'static str = "<blockquote>";
    pub const BLOCKQUOTE_CLOSE: &'static str = "</blockquote>";
}
