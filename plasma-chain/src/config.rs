use serde::{Deserialize, Serialize};

use plasma_types::constants::CHILD_BLOCK_INTERVAL;

/// Settings fixed for the lifetime of a [`ChildChain`](crate::chain::ChildChain).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Hex address of the sole block-signing authority.
    pub authority: String,
    /// Spacing between periodic block numbers.
    #[serde(default = "default_child_block_interval")]
    pub child_block_interval: u64,
}

fn default_child_block_interval() -> u64 {
    CHILD_BLOCK_INTERVAL
}

impl ChainConfig {
    /// Config for the given authority with the default interval.
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
            child_block_interval: CHILD_BLOCK_INTERVAL,
        }
    }

    /// Override the periodic block interval.
    pub fn with_interval(mut self, child_block_interval: u64) -> Self {
        self.child_block_interval = child_block_interval;
        self
    }
}
