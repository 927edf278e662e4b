//! # Line Dispatch
//!
//! Block-level line prefixes: rules, headings, indents, definitions, lists
//! and preformatted runs. A line is handed to the first rule whose prefix
//! it starts with; lines no rule claims become paragraph text.
//!
//! Every handler returns how many bytes of input it consumed, newline
//! included, so the caller can resume after it. Preformatted runs may
//! consume several lines.

pub mod kinds;

use crate::error::ParseError;

use super::{grammar::Grammar, sink::Sink, state::ParserState};

use kinds::{Definition, Heading, HorizontalRule, Indent, List, Paragraph, Preformatted};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRule {
    Rule,
    /// Only active when headings are not extracted as global tags.
    Heading,
    Indent,
    Definition,
    List,
    Preformatted,
}

/// Every line rule in precedence order.
pub static LINE_RULES: &[LineRule] = &[
    LineRule::Rule,
    LineRule::Heading,
    LineRule::Indent,
    LineRule::Definition,
    LineRule::List,
    LineRule::Preformatted,
];

impl LineRule {
    /// Whether `line` starts with this rule's prefix.
    pub fn matches(self, line: &str) -> bool {
        let first = line.as_bytes().first().copied();
        match self {
            LineRule::Rule => line.starts_with(HorizontalRule::PREFIX),
            LineRule::Heading => first == Some(Heading::MARK),
            LineRule::Indent => first == Some(Indent::MARK),
            LineRule::Definition => first == Some(Definition::MARK),
            LineRule::List => first.is_some_and(List::is_marker),
            LineRule::Preformatted => first == Some(Preformatted::MARK),
        }
    }

    /// Runs the handler. `None` means the handler declined the line.
    fn apply(
        self,
        line: &str,
        grammar: &Grammar,
        state: &mut ParserState,
        out: &mut Sink,
    ) -> Result<Option<usize>, ParseError> {
        match self {
            LineRule::Rule => HorizontalRule::apply(line, grammar, state, out).map(Some),
            LineRule::Heading => Heading::apply(line, state, out),
            LineRule::Indent => Indent::apply(line, state, out).map(Some),
            LineRule::Definition => Definition::apply(line, state, out).map(Some),
            LineRule::List => List::apply(line, state, out),
            LineRule::Preformatted => Preformatted::apply(line, state, out).map(Some),
        }
    }
}

/// Parses the line at the start of `line` and returns the bytes consumed.
///
/// Only the first rule whose prefix matches is tried. If it declines, the
/// line falls through to the paragraph rule.
pub fn dispatch(
    line: &str,
    grammar: &Grammar,
    state: &mut ParserState,
    out: &mut Sink,
) -> Result<usize, ParseError> {
    if let Some(rule) = grammar.lines.iter().copied().find(|rule| rule.matches(line))
        && let Some(consumed) = rule.apply(line, grammar, state, out)?
    {
        return Ok(consumed);
    }
    Paragraph::apply(line, state, out)
}
