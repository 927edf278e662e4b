//! Placeholder encoding.
//!
//! While a document is being parsed, extracted blocks are replaced in the
//! output by placeholders of the form `<sep>_<index>_<sep> `, where `<sep>`
//! is a token proven absent from the input. After the pass the output is
//! split back into blocks on those placeholders.

/// A token that does not occur in the parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    token: String,
}

impl Separator {
    const FENCE: &'static str = "@@";

    fn numbered(n: u32) -> Self {
        Self {
            token: format!("{fence}{n}{fence}", fence = Self::FENCE),
        }
    }

    /// Candidate separators absent from `text`, in the order they are tried.
    ///
    /// At most `attempts` numbered candidates are tried.
    pub fn candidates(text: &str, attempts: u32) -> impl Iterator<Item = Separator> + '_ {
        (0..attempts)
            .map(Self::numbered)
            .filter(move |sep| !text.contains(sep.token()))
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// The placeholder standing in for block `index`.
    pub fn placeholder(&self, index: usize) -> String {
        format!("{sep}_{index}_{sep} ", sep = self.token)
    }

    /// Decodes a placeholder at the start of `s`.
    ///
    /// Returns the block index and the placeholder's length in bytes, or
    /// `None` if `s` does not start with a well-formed placeholder.
    pub fn decode(&self, s: &str) -> Option<(usize, usize)> {
        let rest = s.strip_prefix(self.token())?.strip_prefix('_')?;
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let index = rest[..digits].parse().ok()?;
        let tail = rest[digits..]
            .strip_prefix('_')?
            .strip_prefix(self.token())?
            .strip_prefix(' ')?;
        Some((index, s.len() - tail.len()))
    }
}
