use std::fmt::Write;

use crate::parsing::refs::{Block, BlockKind};

/// One line per block: index, kind, the fields that apply to it and the
/// text in escaped form.
///
/// ```text
/// 0 text skip "<p></p>\n"
/// 1 header(2) "Intro"
/// 2 curly[cite] "title=x"
/// ```
pub fn normalize(blocks: &[Block]) -> String {
    let mut listing = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            listing.push('\n');
        }
        let _ = write!(listing, "{i} {}", block.kind.name());
        if block.kind == BlockKind::Header {
            let _ = write!(listing, "({})", block.level);
        }
        if let Some(opcode) = &block.opcode {
            let _ = write!(listing, "[{opcode}]");
        }
        if block.skip {
            listing.push_str(" skip");
        }
        let _ = write!(listing, " {:?}", block.text);
    }
    listing
}
