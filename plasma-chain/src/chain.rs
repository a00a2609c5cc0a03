use std::collections::{HashSet, VecDeque};

use plasma_crypto::address::{address_to_hex, normalize_address};
use plasma_types::block::Block;
use plasma_types::constants::FIRST_DEPOSIT_BLOCK;
use plasma_types::error::ChainError;
use plasma_types::primitives::*;
use plasma_types::transaction::Transaction;
use plasma_types::utxo::UtxoId;

use crate::buffer::PendingBlocks;
use crate::config::ChainConfig;
use crate::ledger::UtxoLedger;
use crate::validation;

/// Result of offering a block to the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validated, applied, and counted.
    Admitted,
    /// Held until block `parent` is admitted.
    Buffered { parent: BlockNumber },
    /// The number is behind the expected slots or already taken.
    Stale,
    /// The block was in an expected slot but failed validation.
    Rejected(ChainError),
}

impl SubmitOutcome {
    pub fn is_admitted(&self) -> bool {
        matches!(self, SubmitOutcome::Admitted)
    }
}

/// The child chain controller.
///
/// Owns the ledger, the out-of-order buffer and the two slot counters. Periodic
/// blocks land on multiples of the interval; deposit blocks fill the numbers
/// in between, one at a time. Callers must serialize access to `submit`.
#[derive(Debug, Clone)]
pub struct ChildChain {
    authority: Address,
    child_block_interval: u64,
    next_child_block: BlockNumber,
    next_deposit_block: BlockNumber,
    ledger: UtxoLedger,
    pending: PendingBlocks,
}

impl ChildChain {
    /// Create an empty chain. Fails on a malformed authority or a zero interval.
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        let authority = normalize_address(&config.authority)?;
        if config.child_block_interval == 0 {
            return Err(ChainError::InvalidConfig {
                reason: "child_block_interval must be positive".to_string(),
            });
        }
        tracing::debug!(
            authority = %address_to_hex(&authority),
            interval = config.child_block_interval,
            "child chain initialized"
        );
        Ok(Self {
            authority,
            child_block_interval: config.child_block_interval,
            next_child_block: config.child_block_interval,
            next_deposit_block: FIRST_DEPOSIT_BLOCK,
            ledger: UtxoLedger::new(),
            pending: PendingBlocks::new(),
        })
    }

    /// Offer a block. Returns true only if this block itself was admitted.
    pub fn submit(&mut self, block: Block) -> bool {
        self.submit_with_reason(block).is_admitted()
    }

    /// Offer a block and report how it was classified.
    ///
    /// An admitted block releases every buffered block that named it as
    /// predecessor; those are offered in arrival order through the same
    /// admission path, and their own successors after them.
    pub fn submit_with_reason(&mut self, block: Block) -> SubmitOutcome {
        let number = block.number;
        let outcome = self.admit(block);
        if !outcome.is_admitted() {
            return outcome;
        }

        let mut work = VecDeque::from([number]);
        while let Some(parent) = work.pop_front() {
            for waiting in self.pending.take(parent) {
                let child = waiting.number;
                match self.admit(waiting) {
                    SubmitOutcome::Admitted => {
                        tracing::info!(block = child, parent, "admitted buffered block");
                        work.push_back(child);
                    }
                    other => {
                        tracing::debug!(
                            block = child,
                            parent,
                            outcome = ?other,
                            "buffered block not admitted"
                        );
                    }
                }
            }
        }
        outcome
    }

    /// Classify, validate and apply a single block without touching the buffer's
    /// successors.
    fn admit(&mut self, block: Block) -> SubmitOutcome {
        let number = block.number;
        let is_next_child_block = number == self.next_child_block;

        if is_next_child_block || number == self.next_deposit_block {
            if let Err(e) = validation::validate_block(&block, &self.authority, &self.ledger) {
                tracing::warn!(block = number, error = %e, "rejecting block");
                return SubmitOutcome::Rejected(e);
            }
            if let Err(e) = self.ledger.apply(block) {
                tracing::warn!(block = number, error = %e, "failed to apply validated block");
                return SubmitOutcome::Rejected(e);
            }

            if is_next_child_block {
                self.next_deposit_block = self.next_child_block + 1;
                self.next_child_block += self.child_block_interval;
            } else {
                self.next_deposit_block += 1;
            }
            tracing::debug!(
                block = number,
                next_child = self.next_child_block,
                next_deposit = self.next_deposit_block,
                "admitted block"
            );
            SubmitOutcome::Admitted
        } else if number > self.next_deposit_block {
            let parent = self.pending.enqueue(block);
            tracing::debug!(
                block = number,
                parent,
                "buffering block until parent arrives"
            );
            SubmitOutcome::Buffered { parent }
        } else {
            tracing::debug!(
                block = number,
                next_deposit = self.next_deposit_block,
                "rejecting stale block"
            );
            SubmitOutcome::Stale
        }
    }

    /// Check a transaction against the current ledger without applying it.
    pub fn validate_transaction(
        &self,
        tx: &Transaction,
        provisional_spent: &HashSet<UtxoId>,
    ) -> Result<(), ChainError> {
        validation::validate_transaction(tx, &self.ledger, provisional_spent)
    }

    pub fn lookup_block(&self, number: BlockNumber) -> Result<&Block, ChainError> {
        self.ledger.lookup_block(number)
    }

    pub fn lookup_transaction(&self, utxo_id: UtxoId) -> Result<&Transaction, ChainError> {
        self.ledger.lookup_transaction(utxo_id)
    }

    /// The number the next periodic block must carry.
    pub fn current_block_number(&self) -> BlockNumber {
        self.next_child_block
    }

    /// The number the next deposit block must carry.
    pub fn next_deposit_block(&self) -> BlockNumber {
        self.next_deposit_block
    }

    /// Number of blocks held in the out-of-order buffer.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn ledger(&self) -> &UtxoLedger {
        &self.ledger
    }

    pub fn authority(&self) -> &Address {
        &self.authority
    }
}
