use crate::error::ParseError;

use super::types::Block;

/// Ordered, append-only collection of [`Block`]s.
///
/// Indices handed out by [`RefTable::register`] never change for the
/// lifetime of the table; placeholders refer to blocks by index.
#[derive(Debug, Default)]
pub struct RefTable {
    blocks: Vec<Block>,
}

impl RefTable {
    /// Minimum number of slots added whenever the table is full. Larger
    /// tables double instead.
    pub const CHUNK: usize = 100;

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `block` and returns its index.
    pub fn register(&mut self, block: Block) -> Result<usize, ParseError> {
        if self.blocks.len() == self.blocks.capacity() {
            let grow = Self::CHUNK.max(self.blocks.len());
            self.blocks.try_reserve_exact(grow)?;
        }
        self.blocks.push(block);
        Ok(self.blocks.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}
