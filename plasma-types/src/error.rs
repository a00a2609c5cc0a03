use thiserror::Error;

use crate::primitives::BlockNumber;
use crate::utxo::UtxoId;

/// All error codes for the child chain core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    // ─── Validation Errors ───────────────────────────────────────────────────
    #[error("invalid block signature")]
    InvalidBlockSignature,

    #[error("invalid transaction signature: input {input_index}")]
    InvalidTxSignature { input_index: usize },

    #[error("output already spent: {utxo_id}")]
    TxAlreadySpent { utxo_id: UtxoId },

    #[error("amount mismatch: {reason}")]
    TxAmountMismatch { reason: String },

    // ─── Lookup Errors ───────────────────────────────────────────────────────
    #[error("block not found: {number}")]
    BlockNotFound { number: BlockNumber },

    #[error("transaction not found: {utxo_id}")]
    TransactionNotFound { utxo_id: UtxoId },

    #[error("output not found: {utxo_id}")]
    OutputNotFound { utxo_id: UtxoId },

    // ─── Arithmetic Errors ───────────────────────────────────────────────────
    #[error("amount overflow")]
    AmountOverflow,

    // ─── Encoding Errors ─────────────────────────────────────────────────────
    #[error("invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("invalid utxo id: {reason}")]
    InvalidUtxoId { reason: String },

    // ─── Configuration Errors ────────────────────────────────────────────────
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl ChainError {
    /// True for the four kinds a block can fail admission with on its merits.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            ChainError::InvalidBlockSignature
                | ChainError::InvalidTxSignature { .. }
                | ChainError::TxAlreadySpent { .. }
                | ChainError::TxAmountMismatch { .. }
        )
    }
}
