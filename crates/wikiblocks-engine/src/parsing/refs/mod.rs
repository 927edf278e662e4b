//! # Block References
//!
//! Everything the parser hands back, and the machinery that lets extracted
//! blocks travel through the line parser as placeholders.
//!
//! - **`types`**: `Block` and `BlockKind`
//! - **`table`**: `RefTable`, the append-only block store
//! - **`separator`**: collision-free separator choice and placeholder codec

pub mod separator;
pub mod table;
pub mod types;

pub use separator::Separator;
pub use table::RefTable;
pub use types::{Block, BlockKind};
