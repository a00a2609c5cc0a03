use plasma_crypto::address::pubkey_to_address;
use plasma_crypto::hash::blake3_hash;
use plasma_crypto::keys::Keypair;
use plasma_types::block::Block;
use plasma_types::error::ChainError;
use plasma_types::primitives::*;
use plasma_types::transaction::Transaction;

/// Compute a transaction hash from its inputs, outputs and deposit flag.
/// Signatures, signers and spent bits are excluded so signing does not
/// change the hash being signed.
pub fn compute_tx_hash(tx: &Transaction) -> Hash {
    let mut data = Vec::new();
    if let Ok(bytes) = borsh::to_vec(&tx.inputs) {
        data.extend_from_slice(&bytes);
    }
    if let Ok(bytes) = borsh::to_vec(&tx.outputs) {
        data.extend_from_slice(&bytes);
    }
    data.push(tx.is_deposit as u8);
    blake3_hash(&data)
}

/// Compute a block hash from its number, deposit flag and transaction hashes.
pub fn compute_block_hash(block: &Block) -> Hash {
    let mut data = Vec::new();
    data.extend_from_slice(&block.number.to_le_bytes());
    data.push(block.is_deposit_block as u8);
    for tx in &block.transactions {
        data.extend_from_slice(&compute_tx_hash(tx));
    }
    blake3_hash(&data)
}

/// Sign a block as the chain authority, recording the signer address.
pub fn sign_block(block: &mut Block, keypair: &Keypair) {
    let hash = compute_block_hash(block);
    block.signature = keypair.sign(&hash);
    block.signer = pubkey_to_address(&keypair.public_key());
}

/// Sign input `index` of a transaction, recording the signer address.
pub fn sign_input(tx: &mut Transaction, index: usize, keypair: &Keypair) -> Result<(), ChainError> {
    if index >= tx.inputs.len() {
        return Err(ChainError::InvalidTxSignature { input_index: index });
    }
    let n = tx.inputs.len();
    tx.signatures.resize(n, NULL_SIGNATURE);
    tx.signers.resize(n, NULL_ADDRESS);

    let hash = compute_tx_hash(tx);
    tx.signatures[index] = keypair.sign(&hash);
    tx.signers[index] = keypair.address();
    Ok(())
}
