use std::collections::BTreeSet;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::primitives::*;
use crate::utxo::UtxoId;

/// Reference to a prior transaction output consumed by a transaction.
///
/// The block number and output index are derived from the identifier, so
/// the three can never disagree. An input in block 0 is the genesis sentinel:
/// its value is accepted without a ledger lookup.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct TxInput {
    pub identifier: UtxoId,
}

impl TxInput {
    /// An input pointing at the given output.
    pub fn new(identifier: UtxoId) -> Self {
        Self { identifier }
    }

    /// The sentinel input `(0, 0, 0)`.
    pub fn genesis() -> Self {
        Self {
            identifier: UtxoId(0),
        }
    }

    pub fn blknum(&self) -> BlockNumber {
        self.identifier.decode().blknum
    }

    pub fn oindex(&self) -> u64 {
        self.identifier.decode().oindex
    }

    /// True if this input is exempt from lookup.
    pub fn is_genesis(&self) -> bool {
        self.blknum() == 0
    }
}

/// A transaction output: either fungible value or a set of distinct tokens.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxOutput {
    /// Fungible amount owned by an address.
    Ft { owner: Address, amount: Amount },
    /// Non-fungible tokens owned by an address.
    Nft {
        owner: Address,
        tokenids: BTreeSet<TokenId>,
    },
}

impl TxOutput {
    pub fn ft(owner: Address, amount: Amount) -> Self {
        TxOutput::Ft { owner, amount }
    }

    pub fn nft(owner: Address, tokenids: impl IntoIterator<Item = TokenId>) -> Self {
        TxOutput::Nft {
            owner,
            tokenids: tokenids.into_iter().collect(),
        }
    }

    pub fn owner(&self) -> &Address {
        match self {
            TxOutput::Ft { owner, .. } | TxOutput::Nft { owner, .. } => owner,
        }
    }
}

/// A child chain transaction.
///
/// `signatures` and `signers` run parallel to `inputs`; `spent` runs parallel
/// to `outputs` and is the only part that changes after admission.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    #[serde(with = "crate::primitives::serde_sig_vec")]
    pub signatures: Vec<Signature>,
    /// Addresses recovered from `signatures`.
    pub signers: Vec<Address>,
    #[serde(default)]
    pub is_deposit: bool,
    #[serde(default)]
    pub spent: Vec<bool>,
}

impl Transaction {
    /// Build an unsigned transaction with every output unspent.
    pub fn new(inputs: Vec<TxInput>, outputs: Vec<TxOutput>, is_deposit: bool) -> Self {
        let signatures = vec![NULL_SIGNATURE; inputs.len()];
        let signers = vec![NULL_ADDRESS; inputs.len()];
        let spent = vec![false; outputs.len()];
        Self {
            inputs,
            outputs,
            signatures,
            signers,
            is_deposit,
            spent,
        }
    }

    /// A deposit bridging `amount` in for `owner`.
    pub fn deposit(owner: Address, amount: Amount) -> Self {
        Self::new(
            vec![TxInput::genesis()],
            vec![TxOutput::ft(owner, amount)],
            true,
        )
    }

    /// A deposit bridging non-fungible tokens in for `owner`.
    pub fn deposit_nft(owner: Address, tokenids: impl IntoIterator<Item = TokenId>) -> Self {
        Self::new(
            vec![TxInput::genesis()],
            vec![TxOutput::nft(owner, tokenids)],
            true,
        )
    }

    /// Whether output `oindex` has been consumed.
    pub fn is_spent(&self, oindex: usize) -> bool {
        self.spent.get(oindex).copied().unwrap_or(false)
    }

    /// Mark output `oindex` consumed. The bit never reverts.
    pub fn mark_spent(&mut self, oindex: usize) {
        if self.spent.len() < self.outputs.len() {
            self.spent.resize(self.outputs.len(), false);
        }
        if let Some(bit) = self.spent.get_mut(oindex) {
            *bit = true;
        }
    }

    /// Signature supplied for input `index`, or the null sentinel.
    pub fn signature(&self, index: usize) -> &Signature {
        self.signatures.get(index).unwrap_or(&NULL_SIGNATURE)
    }

    /// Signer recorded for input `index`, or the null address.
    pub fn signer(&self, index: usize) -> &Address {
        self.signers.get(index).unwrap_or(&NULL_ADDRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_allocates_parallel_vectors() {
        let tx = Transaction::new(
            vec![TxInput::genesis(), TxInput::genesis()],
            vec![TxOutput::ft([1u8; 20], 10)],
            false,
        );
        assert_eq!(tx.signatures, vec![NULL_SIGNATURE; 2]);
        assert_eq!(tx.signers.len(), 2);
        assert_eq!(tx.spent, vec![false]);
    }

    #[test]
    fn test_mark_spent_is_sticky() {
        let mut tx = Transaction::deposit([1u8; 20], 100);
        assert!(!tx.is_spent(0));
        tx.mark_spent(0);
        tx.mark_spent(0);
        assert!(tx.is_spent(0));
    }

    #[test]
    fn test_mark_spent_restores_missing_bits() {
        let mut tx = Transaction::deposit([1u8; 20], 100);
        tx.spent.clear();
        tx.mark_spent(0);
        assert_eq!(tx.spent, vec![true]);
        assert!(!tx.is_spent(7));
    }

    #[test]
    fn test_missing_signature_reads_as_null() {
        let mut tx = Transaction::deposit([1u8; 20], 100);
        tx.signatures.clear();
        assert_eq!(tx.signature(0), &NULL_SIGNATURE);
        assert_eq!(tx.signer(3), &NULL_ADDRESS);
    }

    #[test]
    fn test_input_fields_follow_identifier() {
        let input = TxInput::new(UtxoId::encode(1000, 4, 2).unwrap());
        assert_eq!(input.blknum(), 1000);
        assert_eq!(input.oindex(), 2);
        assert!(!input.is_genesis());
        assert!(TxInput::genesis().is_genesis());
    }

    #[test]
    fn test_nft_output_dedups_tokens() {
        let out = TxOutput::nft([2u8; 20], [5, 6, 5]);
        match out {
            TxOutput::Nft { tokenids, .. } => assert_eq!(tokenids.len(), 2),
            TxOutput::Ft { .. } => panic!("expected nft output"),
        }
    }

    #[test]
    fn test_output_json_is_tagged() {
        let json = serde_json::to_string(&TxOutput::ft([0u8; 20], 5)).unwrap();
        assert!(json.starts_with("{\"ft\":"));
    }
}
