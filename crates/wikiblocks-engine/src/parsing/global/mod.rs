//! # Global Tag Extraction
//!
//! Block-level constructs (templates, links, headings, comments and
//! `<nowiki>` spans) are pulled out of a line before line-level parsing
//! sees it. Each one is registered as a [`Block`](super::refs::Block) and
//! replaced by a placeholder, so later stages never look inside it.
//!
//! ## Modules
//!
//! - **`rules`**: the precedence-ordered rule table
//! - **`extract`**: locating matches and splicing the composite line
//! - **`kinds`**: turning a match interior into a block

pub mod extract;
pub mod kinds;
pub mod rules;

pub use extract::{EndCache, GlobalMatch, find, splice_line};
pub use rules::{GLOBAL_RULES, GlobalKind, GlobalRule, RuleFlags};
