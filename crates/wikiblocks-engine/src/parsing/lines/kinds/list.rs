use crate::{
    error::ParseError,
    parsing::{
        inline::parse_inline,
        scan::{line_end, next_line},
        sink::Sink,
        state::{ListMarker, MAX_LIST_DEPTH, ParserState},
        tags,
    },
};

/// `*` and `#` lists, nested by prefix length.
pub struct List;

impl List {
    pub fn is_marker(b: u8) -> bool {
        ListMarker::from_byte(b).is_some()
    }

    /// Moves the open list levels from the current pattern to the one on
    /// this line, then writes the item text.
    ///
    /// Declines prefixes deeper than [`MAX_LIST_DEPTH`]. A prefix with no
    /// text after it is consumed without touching the state.
    pub fn apply(
        line: &str,
        state: &mut ParserState,
        out: &mut Sink,
    ) -> Result<Option<usize>, ParseError> {
        let pattern: Vec<ListMarker> = line
            .bytes()
            .map_while(ListMarker::from_byte)
            .collect();
        let depth = pattern.len();
        if depth > MAX_LIST_DEPTH {
            return Ok(None);
        }
        let consumed = next_line(line, depth);
        let body = &line[depth..line_end(line, depth)];
        if body.is_empty() {
            return Ok(Some(consumed));
        }

        state.format.paragraph_stop(out)?;
        let format = &mut state.format;
        let current = format.lists.len();
        if format.lists == pattern {
            out.push_str(tags::ITEM_CLOSE)?;
            out.push_str(tags::ITEM_OPEN)?;
        } else if current == depth {
            // same depth, different type: only the deepest level is reopened
            out.push_str(tags::ITEM_CLOSE)?;
            out.push_str(format.lists[depth - 1].close_tag())?;
            out.push_str(pattern[depth - 1].open_tag())?;
            out.push_str(tags::ITEM_OPEN)?;
            format.lists = pattern;
        } else if current > depth {
            format.close_lists_to(depth, out)?;
            out.push_str(tags::ITEM_CLOSE)?;
            out.push_str(tags::ITEM_OPEN)?;
            format.lists = pattern;
        } else {
            for marker in &pattern[current..] {
                out.push_str(marker.open_tag())?;
                out.push_str(tags::ITEM_OPEN)?;
            }
            format.lists = pattern;
        }

        parse_inline(body, state, out)?;
        Ok(Some(consumed))
    }
}
