//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a block list as a stable, line-per-block listing
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (no separator in
//!   text, field shapes per kind, elision consistent with content)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
