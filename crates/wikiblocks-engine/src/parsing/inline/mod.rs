//! # Inline Parsing
//!
//! Cursor-based scan of a single line for formatting tokens.
//!
//! ## Architecture
//!
//! The parser looks for the earliest token on the line, escapes the plain
//! text before it and hands the token to its handler. Handlers update the
//! shared formatting state and report how much input they used through
//! [`TagOutcome`](rules::TagOutcome).
//!
//! ## Modules
//!
//! - **`kinds`**: inline constructs with owned tokens (quotes, markup, ISBN)
//! - **`rules`**: the precedence-ordered token table
//! - **`cursor`**: `Cursor` for earliest-token search over a line
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rules;

pub use parser::parse_inline;
pub use rules::{INLINE_RULES, InlineKind, InlineRule, TagOutcome};
