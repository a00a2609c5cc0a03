//! Shared type definitions for the Plasma child chain.
//!
//! Blocks, transactions, typed outputs, the compact UTXO identifier, and the
//! error taxonomy used by the validation core.

pub mod block;
pub mod constants;
pub mod error;
pub mod primitives;
pub mod transaction;
pub mod utxo;

#[cfg(test)]
mod tests {
    use borsh::{BorshDeserialize, BorshSerialize};

    /// Helper: borsh round-trip test.
    fn borsh_roundtrip<T: BorshSerialize + BorshDeserialize + PartialEq + std::fmt::Debug>(
        value: &T,
    ) {
        let encoded = borsh::to_vec(value).expect("borsh serialize failed");
        let decoded = T::try_from_slice(&encoded).expect("borsh deserialize failed");
        assert_eq!(*value, decoded);
    }

    #[test]
    fn test_block_roundtrip() {
        use crate::block::Block;
        use crate::transaction::{Transaction, TxInput, TxOutput};
        use crate::utxo::UtxoId;

        let mut tx = Transaction::new(
            vec![TxInput::new(UtxoId::encode(1, 0, 0).unwrap())],
            vec![
                TxOutput::ft([3u8; 20], 70),
                TxOutput::nft([4u8; 20], [1, 2, 3]),
            ],
            false,
        );
        tx.signatures[0] = [9u8; 64];
        tx.signers[0] = [3u8; 20];
        let mut block = Block::new(1000, vec![tx]);
        block.signature = [7u8; 64];
        block.signer = [8u8; 20];
        borsh_roundtrip(&block);
    }

    #[test]
    fn test_block_json_roundtrip() {
        use crate::block::Block;
        use crate::transaction::Transaction;

        let block = Block::deposit(3, Transaction::deposit([5u8; 20], 1_000));
        let json = serde_json::to_string(&block).unwrap();
        let decoded: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(block, decoded);
    }

    #[test]
    fn test_validation_failure_kinds() {
        use crate::error::ChainError;
        use crate::utxo::UtxoId;

        let utxo_id = UtxoId(1);
        assert!(ChainError::InvalidBlockSignature.is_validation_failure());
        assert!(ChainError::TxAlreadySpent { utxo_id }.is_validation_failure());
        assert!(!ChainError::BlockNotFound { number: 1 }.is_validation_failure());
        assert!(!ChainError::AmountOverflow.is_validation_failure());
    }
}
