use std::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::{BLOCK_OFFSET, MAX_OUTPUT_INDEX, MAX_TX_INDEX, TX_OFFSET};
use crate::error::ChainError;
use crate::primitives::BlockNumber;

/// Compact identifier of a transaction output:
/// `blknum * BLOCK_OFFSET + txindex * TX_OFFSET + oindex`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, BorshSerialize, BorshDeserialize,
    Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UtxoId(pub u64);

/// The decoded position of an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtxoPosition {
    pub blknum: BlockNumber,
    pub txindex: u64,
    pub oindex: u64,
}

impl UtxoId {
    /// Encode a `(blknum, txindex, oindex)` triple.
    pub fn encode(blknum: BlockNumber, txindex: u64, oindex: u64) -> Result<Self, ChainError> {
        if txindex >= MAX_TX_INDEX {
            return Err(ChainError::InvalidUtxoId {
                reason: format!("tx index {} >= {}", txindex, MAX_TX_INDEX),
            });
        }
        if oindex >= MAX_OUTPUT_INDEX {
            return Err(ChainError::InvalidUtxoId {
                reason: format!("output index {} >= {}", oindex, MAX_OUTPUT_INDEX),
            });
        }
        blknum
            .checked_mul(BLOCK_OFFSET)
            .and_then(|v| v.checked_add(txindex * TX_OFFSET + oindex))
            .map(UtxoId)
            .ok_or_else(|| ChainError::InvalidUtxoId {
                reason: format!("block number {} out of range", blknum),
            })
    }

    /// Split the identifier back into its triple.
    pub fn decode(self) -> UtxoPosition {
        UtxoPosition {
            blknum: self.0 / BLOCK_OFFSET,
            txindex: (self.0 % BLOCK_OFFSET) / TX_OFFSET,
            oindex: self.0 % TX_OFFSET,
        }
    }
}

impl fmt::Display for UtxoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.decode();
        write!(f, "{}/{}/{}", pos.blknum, pos.txindex, pos.oindex)
    }
}
