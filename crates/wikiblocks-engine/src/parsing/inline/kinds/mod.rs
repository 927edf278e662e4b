//! # Inline Kinds
//!
//! Inline constructs that own their tokens. The rule table and the parser
//! refer to these constants; neither spells out a token itself.
//!
//! ## Types
//!
//! - **`Quotes`**: `'''''`, `'''` and `''` emphasis toggles
//! - **`Markup`**: explicit `<b>`, `<i>`, `<br>` and `<p>` tags
//! - **`Passthrough`**: container tags copied through untouched
//! - **`Isbn`**: `isbn 0-123-45678-9` references

pub mod isbn;
pub mod markup;
pub mod quotes;

pub use isbn::Isbn;
pub use markup::{Markup, Passthrough};
pub use quotes::Quotes;
