use log::trace;

use crate::{
    error::ParseError,
    parsing::{
        grammar::Grammar,
        scan::{find_ci, line_end, next_line, starts_with_ci},
        sink::Sink,
        span::Span,
        state::ParserState,
        tags,
    },
};

use super::{kinds, rules::GlobalRule};

/// A global tag located in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalMatch {
    pub rule: &'static GlobalRule,
    /// Offset of the start token.
    pub start: usize,
    /// Text between the tokens.
    pub interior: Span,
    /// Offset just past the end token, or end of input if unterminated.
    pub end: usize,
    /// False when an optional end token was missing and the match runs to
    /// end of input.
    pub terminated: bool,
}

/// End offsets found so far in one pass: the nearest end token for each
/// rule and the end of the line being scanned.
///
/// Scans only move forward through the input, so a closer found for one
/// start token also serves every later start token before it, and a rule
/// with no closer left never needs to look again. This keeps a line full of
/// openers or matches linear.
#[derive(Debug, Clone)]
pub struct EndCache {
    ends: Vec<Nearest>,
    /// Last `(from, eol)` pair looked up.
    line: Option<(usize, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nearest {
    Unknown,
    /// First closer at or after `from`.
    At { from: usize, close: usize },
    /// No closer at or after this offset.
    Missing(usize),
}

impl EndCache {
    /// A cache for a rule table of `rules` entries.
    pub fn new(rules: usize) -> Self {
        Self {
            ends: vec![Nearest::Unknown; rules],
            line: None,
        }
    }

    fn line_end(&mut self, text: &str, from: usize) -> usize {
        if let Some((start, eol)) = self.line
            && start <= from
            && from <= eol
        {
            return eol;
        }
        let eol = line_end(text, from);
        self.line = Some((from, eol));
        eol
    }

    /// First offset `>= after` of `end` in `bytes`, for the rule in `slot`.
    fn closer(&mut self, slot: usize, bytes: &[u8], after: usize, end: &str) -> Option<usize> {
        match self.ends[slot] {
            Nearest::At { from, close } if from <= after && after <= close => return Some(close),
            Nearest::Missing(from) if from <= after => return None,
            _ => {}
        }
        let found = find_ci(bytes, after, end);
        self.ends[slot] = match found {
            Some(close) => Nearest::At { from: after, close },
            None => Nearest::Missing(after),
        };
        found
    }
}

/// Finds the first global tag starting between `from` and the end of its line.
///
/// Positions are tried left to right and, at each position, rules in
/// precedence order. `line_start` is the first byte of the physical line the
/// scan began on; line-start rules only match there. `ends` must have been
/// built for `rules`.
pub fn find(
    rules: &[&'static GlobalRule],
    ends: &mut EndCache,
    text: &str,
    from: usize,
    line_start: usize,
) -> Option<GlobalMatch> {
    let bytes = text.as_bytes();
    let eol = ends.line_end(text, from);
    (from..eol).find_map(|pos| {
        rules.iter().enumerate().find_map(|(slot, &rule)| {
            match_at(rule, slot, ends, bytes, pos, eol, line_start)
        })
    })
}

fn match_at(
    rule: &'static GlobalRule,
    slot: usize,
    ends: &mut EndCache,
    bytes: &[u8],
    pos: usize,
    eol: usize,
    line_start: usize,
) -> Option<GlobalMatch> {
    let flags = rule.flags;
    if flags.line_start && pos != line_start {
        return None;
    }
    if !starts_with_ci(bytes, pos, rule.start) {
        return None;
    }
    let after = pos + rule.start.len();
    match ends.closer(slot, bytes, after, rule.end) {
        Some(close) => {
            if flags.same_line && close > eol {
                return None;
            }
            // a bare delimiter run such as `==` is not an empty heading
            if close == after {
                return None;
            }
            Some(GlobalMatch {
                rule,
                start: pos,
                interior: Span::new(after, close),
                end: close + rule.end.len(),
                terminated: true,
            })
        }
        None if flags.requires_end => None,
        None => Some(GlobalMatch {
            rule,
            start: pos,
            interior: Span::new(after, bytes.len()),
            end: bytes.len(),
            terminated: false,
        }),
    }
}

/// Builds the composite line for a line containing at least one global tag.
///
/// Literal text around the matches is copied unchanged and every match is
/// replaced by whatever its handler writes. Matches may span several
/// physical lines; scanning continues on the line where the last one ended.
/// Returns the composite line and the offset of the next line to parse.
pub fn splice_line(
    grammar: &Grammar,
    text: &str,
    line_start: usize,
    first: GlobalMatch,
    ends: &mut EndCache,
    state: &mut ParserState,
) -> Result<(Sink, usize), ParseError> {
    let mut line = Sink::new();
    let mut pos = line_start;
    let mut next = Some(first);

    while let Some(m) = next {
        trace!(
            "global tag {:?} at {}..{} (terminated: {})",
            m.rule.kind, m.start, m.end, m.terminated
        );
        line.push_str(&text[pos..m.start])?;
        if m.rule.flags.breaks_paragraph {
            line.push_str(tags::PARAGRAPH_BREAK)?;
        }
        kinds::handle(
            m.rule.kind,
            m.interior.slice(text),
            grammar.comments,
            state,
            &mut line,
        )?;
        pos = m.end;
        next = if m.terminated {
            find(&grammar.global, ends, text, pos, line_start)
        } else {
            None
        };
    }

    line.push_str(&text[pos..line_end(text, pos)])?;
    Ok((line, next_line(text, pos)))
}
