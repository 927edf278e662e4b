pub mod error;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use error::ParseError;
pub use parsing::{
    Block, BlockKind, CommentMode, HeaderMode, ParseOptions, ParsedDoc, parse, parse_document,
    parse_with_options,
};
pub use render::{debug_listing, html};
