//! # Formatting State
//!
//! Paragraph, list, bold and italic state carried across lines.
//!
//! Bold and italic are nesting counters rather than flags: markup is only
//! written on the 0→1 and 1→0 transitions, so a repeated "turn on" is
//! absorbed silently. Paragraph open/close are idempotent.

use crate::error::ParseError;

use super::{
    refs::{Block, RefTable, Separator},
    sink::Sink,
    tags,
};

/// Deepest list nesting that is still treated as a list.
pub const MAX_LIST_DEPTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `#`
    Ordered,
    /// `*`
    Unordered,
}

impl ListMarker {
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'#' => Some(ListMarker::Ordered),
            b'*' => Some(ListMarker::Unordered),
            _ => None,
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            ListMarker::Ordered => tags::ORDERED_OPEN,
            ListMarker::Unordered => tags::UNORDERED_OPEN,
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListMarker::Ordered => tags::ORDERED_CLOSE,
            ListMarker::Unordered => tags::UNORDERED_CLOSE,
        }
    }
}

/// Nesting order for a combined `'''''` toggle that opens both styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisOrder {
    /// `<b><i>`
    BoldOuter,
    /// `<i><b>`
    ItalicOuter,
}

#[derive(Debug, Default)]
pub struct FormatState {
    pub paragraph_open: bool,
    pub bold: u32,
    pub italic: u32,
    /// One marker per open list level, outermost first.
    pub lists: Vec<ListMarker>,
}

impl FormatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a paragraph unless one is already open. Open lists are closed first.
    pub fn paragraph_start(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if !self.paragraph_open {
            self.close_lists(out)?;
            self.paragraph_open = true;
            out.push_str(tags::PARAGRAPH_OPEN)?;
        }
        Ok(())
    }

    /// Closes the open paragraph, if any, together with any open lists.
    pub fn paragraph_stop(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if self.paragraph_open {
            self.paragraph_open = false;
            out.push_str(tags::PARAGRAPH_CLOSE)?;
            self.close_lists(out)?;
        }
        Ok(())
    }

    /// Closes every open list level, innermost first.
    pub fn close_lists(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        self.close_lists_to(0, out)
    }

    /// Closes list levels, innermost first, until `depth` remain open.
    pub fn close_lists_to(&mut self, depth: usize, out: &mut Sink) -> Result<(), ParseError> {
        while self.lists.len() > depth {
            if let Some(marker) = self.lists.pop() {
                out.push_str(tags::ITEM_CLOSE)?;
                out.push_str(marker.close_tag())?;
            }
        }
        Ok(())
    }

    pub fn bold_on(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if self.bold == 0 {
            out.push_str(tags::BOLD_OPEN)?;
        }
        self.bold += 1;
        Ok(())
    }

    pub fn bold_off(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if self.bold == 0 {
            return Ok(());
        }
        self.bold -= 1;
        if self.bold == 0 {
            out.push_str(tags::BOLD_CLOSE)?;
        }
        Ok(())
    }

    pub fn italic_on(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if self.italic == 0 {
            out.push_str(tags::ITALIC_OPEN)?;
        }
        self.italic += 1;
        Ok(())
    }

    pub fn italic_off(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if self.italic == 0 {
            return Ok(());
        }
        self.italic -= 1;
        if self.italic == 0 {
            out.push_str(tags::ITALIC_CLOSE)?;
        }
        Ok(())
    }

    pub fn toggle_bold(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if self.bold > 0 {
            self.bold_off(out)
        } else {
            self.bold_on(out)
        }
    }

    pub fn toggle_italic(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if self.italic > 0 {
            self.italic_off(out)
        } else {
            self.italic_on(out)
        }
    }

    /// The combined `'''''` toggle.
    ///
    /// | bold | italic | action |
    /// |------|--------|--------|
    /// | off  | off    | open both, in `order` |
    /// | on   | off    | close bold, open italic |
    /// | off  | on     | close italic, open bold |
    /// | on   | on     | close italic, then bold |
    ///
    /// When both are open the original nesting is unknown; italic is closed
    /// first.
    pub fn toggle_bold_italic(
        &mut self,
        order: EmphasisOrder,
        out: &mut Sink,
    ) -> Result<(), ParseError> {
        match (self.bold > 0, self.italic > 0) {
            (true, true) => {
                self.italic_off(out)?;
                self.bold_off(out)
            }
            (true, false) => {
                self.bold_off(out)?;
                self.italic_on(out)
            }
            (false, true) => {
                self.italic_off(out)?;
                self.bold_on(out)
            }
            (false, false) => match order {
                EmphasisOrder::ItalicOuter => {
                    self.italic_on(out)?;
                    self.bold_on(out)
                }
                EmphasisOrder::BoldOuter => {
                    self.bold_on(out)?;
                    self.italic_on(out)
                }
            },
        }
    }

    /// Closes italic then bold regardless of nesting depth.
    pub fn close_emphasis(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        if self.italic > 0 {
            self.italic = 0;
            out.push_str(tags::ITALIC_CLOSE)?;
        }
        if self.bold > 0 {
            self.bold = 0;
            out.push_str(tags::BOLD_CLOSE)?;
        }
        Ok(())
    }

    /// End-of-document cleanup: italic, bold, paragraph, then lists.
    pub fn finish(&mut self, out: &mut Sink) -> Result<(), ParseError> {
        self.close_emphasis(out)?;
        self.paragraph_stop(out)?;
        self.close_lists(out)
    }
}

/// Per-call parser state threaded through every stage.
#[derive(Debug)]
pub struct ParserState {
    pub format: FormatState,
    pub separator: Separator,
    /// Blocks extracted during this pass, referenced by placeholder index.
    pub refs: RefTable,
}

impl ParserState {
    pub fn new(separator: Separator) -> Self {
        Self {
            format: FormatState::new(),
            separator,
            refs: RefTable::new(),
        }
    }

    /// Registers `block` and writes its placeholder to `out`.
    pub fn emit_ref(&mut self, block: Block, out: &mut Sink) -> Result<(), ParseError> {
        let index = self.refs.register(block)?;
        out.push_str(&self.separator.placeholder(index))
    }
}
