use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::primitives::*;
use crate::transaction::Transaction;

/// A child chain block.
///
/// Periodic blocks are signed by the chain authority; deposit blocks carry a
/// single deposit transaction and no authority signature.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct Block {
    pub number: BlockNumber,
    pub transactions: Vec<Transaction>,
    #[serde(with = "crate::primitives::serde_sig")]
    pub signature: Signature,
    /// Address recovered from `signature`.
    pub signer: Address,
    #[serde(default)]
    pub is_deposit_block: bool,
}

impl Block {
    /// An unsigned periodic block.
    pub fn new(number: BlockNumber, transactions: Vec<Transaction>) -> Self {
        Self {
            number,
            transactions,
            signature: NULL_SIGNATURE,
            signer: NULL_ADDRESS,
            is_deposit_block: false,
        }
    }

    /// A deposit block wrapping a single deposit transaction.
    pub fn deposit(number: BlockNumber, tx: Transaction) -> Self {
        Self {
            number,
            transactions: vec![tx],
            signature: NULL_SIGNATURE,
            signer: NULL_ADDRESS,
            is_deposit_block: true,
        }
    }
}
