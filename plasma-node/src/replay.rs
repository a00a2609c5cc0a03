use std::fmt;

use plasma_chain::chain::{ChildChain, SubmitOutcome};
use plasma_types::block::Block;

use crate::error::NodeError;

/// Tally of a replay run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Blocks read from the file.
    pub submitted: usize,
    /// Blocks in the ledger afterwards, including ones released from the buffer.
    pub admitted: usize,
    pub buffered: usize,
    pub stale: usize,
    /// Blocks that failed a signature, double-spend or conservation check.
    pub rejected: usize,
    /// Blocks dropped because an input could not be resolved.
    pub unresolved: usize,
    /// Blocks still waiting on a predecessor at the end.
    pub pending: usize,
    pub current_block_number: u64,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "submitted {} | admitted {} | buffered {} | stale {} | ",
            self.submitted, self.admitted, self.buffered, self.stale
        )?;
        write!(
            f,
            "rejected {} | unresolved {} | ",
            self.rejected, self.unresolved
        )?;
        write!(
            f,
            "pending {} | next child block {}",
            self.pending, self.current_block_number
        )
    }
}

/// Parse a JSON array of blocks.
pub fn read_blocks(path: &str) -> Result<Vec<Block>, NodeError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Submit every block in order and count the outcomes.
pub fn replay_blocks(chain: &mut ChildChain, blocks: Vec<Block>) -> ReplaySummary {
    let mut summary = ReplaySummary {
        submitted: blocks.len(),
        ..Default::default()
    };
    let before = chain.ledger().block_count();

    for block in blocks {
        let number = block.number;
        match chain.submit_with_reason(block) {
            SubmitOutcome::Admitted => {
                tracing::info!(block = number, "admitted");
            }
            SubmitOutcome::Buffered { parent } => {
                tracing::info!(block = number, parent, "buffered");
                summary.buffered += 1;
            }
            SubmitOutcome::Stale => {
                tracing::info!(block = number, "stale");
                summary.stale += 1;
            }
            SubmitOutcome::Rejected(e) if e.is_validation_failure() => {
                tracing::info!(block = number, error = %e, "rejected");
                summary.rejected += 1;
            }
            SubmitOutcome::Rejected(e) => {
                tracing::info!(block = number, error = %e, "unresolved input");
                summary.unresolved += 1;
            }
        }
    }

    summary.admitted = chain.ledger().block_count() - before;
    summary.pending = chain.pending_count();
    summary.current_block_number = chain.current_block_number();
    summary
}
