use super::{
    global::{GLOBAL_RULES, GlobalRule},
    lines::{LINE_RULES, LineRule},
    options::{CommentMode, HeaderMode, ParseOptions},
};

/// The rule set active for one parse, derived from [`ParseOptions`].
///
/// Headings are handled by exactly one of the two stages: as global tags in
/// [`HeaderMode::Block`], or by the line dispatcher in [`HeaderMode::Line`].
#[derive(Debug, Clone)]
pub struct Grammar {
    pub global: Vec<&'static GlobalRule>,
    pub lines: Vec<LineRule>,
    pub comments: CommentMode,
}

impl Grammar {
    pub fn new(options: &ParseOptions) -> Self {
        let block_headers = options.headers == HeaderMode::Block;
        Self {
            global: GLOBAL_RULES
                .iter()
                .filter(|rule| block_headers || !rule.is_header())
                .collect(),
            lines: LINE_RULES
                .iter()
                .copied()
                .filter(|rule| !block_headers || *rule != LineRule::Heading)
                .collect(),
            comments: options.comments,
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new(&ParseOptions::default())
    }
}
