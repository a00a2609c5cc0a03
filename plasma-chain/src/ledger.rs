use std::collections::BTreeMap;

use plasma_types::block::Block;
use plasma_types::error::ChainError;
use plasma_types::primitives::BlockNumber;
use plasma_types::transaction::Transaction;
use plasma_types::utxo::UtxoId;

/// Authoritative store of admitted blocks, keyed by block number.
///
/// Blocks are immutable once stored except for the spent bits of their
/// transactions' outputs, which [`UtxoLedger::apply`] flips from false to true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtxoLedger {
    blocks: BTreeMap<BlockNumber, Block>,
}

impl UtxoLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch an admitted block.
    pub fn lookup_block(&self, number: BlockNumber) -> Result<&Block, ChainError> {
        self.blocks
            .get(&number)
            .ok_or(ChainError::BlockNotFound { number })
    }

    /// Fetch the transaction an identifier points into.
    pub fn lookup_transaction(&self, utxo_id: UtxoId) -> Result<&Transaction, ChainError> {
        let pos = utxo_id.decode();
        let block = self.lookup_block(pos.blknum)?;
        usize::try_from(pos.txindex)
            .ok()
            .and_then(|i| block.transactions.get(i))
            .ok_or(ChainError::TransactionNotFound { utxo_id })
    }

    fn lookup_transaction_mut(&mut self, utxo_id: UtxoId) -> Result<&mut Transaction, ChainError> {
        let pos = utxo_id.decode();
        let block = self
            .blocks
            .get_mut(&pos.blknum)
            .ok_or(ChainError::BlockNotFound { number: pos.blknum })?;
        usize::try_from(pos.txindex)
            .ok()
            .and_then(|i| block.transactions.get_mut(i))
            .ok_or(ChainError::TransactionNotFound { utxo_id })
    }

    /// Mark every output the block consumes as spent, then store the block.
    ///
    /// Must only be called once the block has passed validation. All inputs
    /// are resolved before anything is written, so a failed lookup leaves the
    /// ledger untouched.
    pub fn apply(&mut self, block: Block) -> Result<(), ChainError> {
        let consumed: Vec<UtxoId> = block
            .transactions
            .iter()
            .flat_map(|tx| tx.inputs.iter())
            .filter(|input| !input.is_genesis())
            .map(|input| input.identifier)
            .collect();

        for utxo_id in &consumed {
            self.lookup_transaction(*utxo_id)?;
        }
        for utxo_id in consumed {
            let oindex = utxo_id.decode().oindex as usize;
            self.lookup_transaction_mut(utxo_id)?.mark_spent(oindex);
        }

        self.blocks.insert(block.number, block);
        Ok(())
    }

    /// Number of admitted blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
