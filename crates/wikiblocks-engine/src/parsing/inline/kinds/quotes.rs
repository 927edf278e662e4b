use crate::parsing::state::EmphasisOrder;

/// Apostrophe runs toggling bold and italic.
pub struct Quotes;

impl Quotes {
    pub const BOLD_ITALIC: &'static str = "'''''";
    pub const BOLD: &'static str = "'''";
    pub const ITALIC: &'static str = "''";

    /// Guesses how a `'''''` opening both styles nests.
    ///
    /// `after` is the text following the token. If the next `''` in it is
    /// part of a `'''` (bold closes first), italic is the outer style.
    /// Anything else, including `'''''` or no closer at all, keeps bold outside.
    pub fn nesting(after: &str) -> EmphasisOrder {
        let Some(at) = after.find(Self::ITALIC) else {
            return EmphasisOrder::BoldOuter;
        };
        let b = after.as_bytes();
        if b.get(at + 2) == Some(&b'\'') && b.get(at + 3) != Some(&b'\'') {
            EmphasisOrder::ItalicOuter
        } else {
            EmphasisOrder::BoldOuter
        }
    }
}
