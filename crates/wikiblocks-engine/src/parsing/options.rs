use serde::{Deserialize, Serialize};

/// How `= Heading =` lines are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Headings are extracted as `header` blocks.
    #[default]
    Block,
    /// Headings are rendered inline as `<h1>`..`<h4>` inside text blocks.
    Line,
}

/// What happens to `<!-- ... -->` comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentMode {
    /// Comments are removed from the output.
    #[default]
    Drop,
    /// Comments are kept as `comment` blocks.
    Block,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub headers: HeaderMode,
    pub comments: CommentMode,
    /// Upper bound on separator candidates tried before giving up.
    pub separator_attempts: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            headers: HeaderMode::default(),
            comments: CommentMode::default(),
            separator_attempts: 999,
        }
    }
}
