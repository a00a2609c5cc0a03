use std::collections::HashMap;

use plasma_types::block::Block;
use plasma_types::primitives::BlockNumber;

/// Blocks waiting on a predecessor that has not been admitted yet, keyed by
/// the predecessor's number. Each list keeps arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingBlocks {
    by_parent: HashMap<BlockNumber, Vec<Block>>,
}

impl PendingBlocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a block until `block.number - 1` is admitted. Returns the parent key.
    pub fn enqueue(&mut self, block: Block) -> BlockNumber {
        let parent = block.number.saturating_sub(1);
        self.by_parent.entry(parent).or_default().push(block);
        parent
    }

    /// Remove and return everything waiting on `parent`, oldest first.
    pub fn take(&mut self, parent: BlockNumber) -> Vec<Block> {
        self.by_parent.remove(&parent).unwrap_or_default()
    }

    /// Total number of buffered blocks.
    pub fn len(&self) -> usize {
        self.by_parent.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_parent.is_empty()
    }
}
