use serde::{Deserialize, Serialize};

/// The kind of an output block.
///
/// The serialized names (see [`BlockKind::name`]) are what downstream
/// serializers key on and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Rendered HTML produced by the line and inline parsers.
    Text,
    /// A `{{...}}` template, captured literally.
    #[serde(rename = "curly")]
    Template,
    /// A `= ... =` heading, level 1 to 4.
    Header,
    /// A `[[...]]` link target.
    Link,
    /// A validated ISBN, hyphens removed.
    Isbn,
    /// A `<nowiki>` span, verbatim.
    RawText,
    /// An `<!-- -->` comment body.
    Comment,
    /// Any name this version does not know about.
    #[serde(other)]
    Unknown,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Template => "curly",
            BlockKind::Header => "header",
            BlockKind::Link => "link",
            BlockKind::Isbn => "isbn",
            BlockKind::RawText => "rawtext",
            BlockKind::Comment => "comment",
            BlockKind::Unknown => "unknown",
        }
    }
}

/// One unit of parser output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Heading depth for [`BlockKind::Header`], 0 otherwise.
    pub level: u8,
    /// Template name, only ever set on [`BlockKind::Template`].
    pub opcode: Option<String>,
    pub text: String,
    /// Set on blocks that carry nothing worth rendering. Skipped blocks keep
    /// their slot so indices stay stable.
    pub skip: bool,
}

impl Block {
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            level: 0,
            opcode: None,
            text: text.into(),
            skip: false,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Text, text)
    }

    pub fn header(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            ..Self::new(BlockKind::Header, text)
        }
    }

    pub fn template(opcode: Option<String>, content: impl Into<String>) -> Self {
        Self {
            opcode,
            ..Self::new(BlockKind::Template, content)
        }
    }
}
