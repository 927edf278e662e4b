use crate::parsing::scan::{starts_with, starts_with_ci};

use super::kinds::{Isbn, Markup, Passthrough, Quotes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    BoldItalic,
    Bold,
    Italic,
    BoldOpen,
    ItalicOpen,
    BoldClose,
    ItalicClose,
    LineBreak,
    ParagraphOpen,
    ParagraphClose,
    Isbn,
    Passthrough,
}

/// An inline token and what it does.
#[derive(Debug, PartialEq, Eq)]
pub struct InlineRule {
    pub token: &'static str,
    pub case_sensitive: bool,
    pub kind: InlineKind,
}

impl InlineRule {
    const fn new(token: &'static str, kind: InlineKind) -> Self {
        Self {
            token,
            case_sensitive: false,
            kind,
        }
    }

    /// Whether this rule's token starts at `hay[at..]`.
    pub fn matches(&self, hay: &[u8], at: usize) -> bool {
        if self.case_sensitive {
            starts_with(hay, at, self.token)
        } else {
            starts_with_ci(hay, at, self.token)
        }
    }
}

/// What a handler did with a matched token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOutcome {
    /// Handled; advance past the token itself.
    Token,
    /// Handled; advance by this many bytes, measured from the token start.
    Consumed(usize),
    /// Not a tag after all; the token is literal text.
    Rejected,
}

/// Inline rules in precedence order. Longer quote runs must come first.
pub static INLINE_RULES: &[InlineRule] = &[
    InlineRule::new(Quotes::BOLD_ITALIC, InlineKind::BoldItalic),
    InlineRule::new(Quotes::BOLD, InlineKind::Bold),
    InlineRule::new(Quotes::ITALIC, InlineKind::Italic),
    InlineRule::new(Markup::BOLD_OPEN, InlineKind::BoldOpen),
    InlineRule::new(Markup::ITALIC_OPEN, InlineKind::ItalicOpen),
    InlineRule::new(Markup::BOLD_CLOSE, InlineKind::BoldClose),
    InlineRule::new(Markup::ITALIC_CLOSE, InlineKind::ItalicClose),
    InlineRule::new(Markup::LINE_BREAK, InlineKind::LineBreak),
    InlineRule::new(Markup::PARAGRAPH_OPEN, InlineKind::ParagraphOpen),
    InlineRule::new(Markup::PARAGRAPH_CLOSE, InlineKind::ParagraphClose),
    InlineRule {
        token: Isbn::TOKEN,
        case_sensitive: true,
        kind: InlineKind::Isbn,
    },
    InlineRule::new(Passthrough::CENTER_OPEN, InlineKind::Passthrough),
    InlineRule::new(Passthrough::CENTER_CLOSE, InlineKind::Passthrough),
    InlineRule::new(Passthrough::BLOCKQUOTE_OPEN, InlineKind::Passthrough),
    InlineRule::new(Passthrough::BLOCKQUOTE_CLOSE, InlineKind::Passthrough),
];
