use std::collections::{BTreeSet, HashSet};

use plasma_crypto::signature::is_null_signature;
use plasma_types::block::Block;
use plasma_types::error::ChainError;
use plasma_types::primitives::*;
use plasma_types::transaction::{Transaction, TxOutput};
use plasma_types::utxo::UtxoId;

use crate::ledger::UtxoLedger;

/// Validate a whole block against the ledger. Nothing is mutated.
///
/// Periodic blocks must carry a signature from `authority`; deposit blocks
/// skip the check. Transactions are then validated in order, and the first
/// failure rejects the block. Outputs consumed by earlier transactions in the
/// block count as spent for later ones.
pub fn validate_block(
    block: &Block,
    authority: &Address,
    ledger: &UtxoLedger,
) -> Result<(), ChainError> {
    if !block.is_deposit_block
        && (is_null_signature(&block.signature) || block.signer != *authority)
    {
        return Err(ChainError::InvalidBlockSignature);
    }

    let mut provisional_spent = HashSet::new();
    for tx in &block.transactions {
        validate_transaction(tx, ledger, &provisional_spent)?;
        provisional_spent.extend(
            tx.inputs
                .iter()
                .filter(|input| !input.is_genesis())
                .map(|input| input.identifier),
        );
    }
    Ok(())
}

/// Validate one transaction against the ledger.
///
/// `provisional_spent` holds outputs already consumed earlier in the same
/// validation pass; spending any of them is a double spend. Inputs from
/// block 0 are accepted without lookup. Unless the transaction is a
/// deposit, fungible input value must cover output value and the input
/// token set must equal the output token set.
pub fn validate_transaction(
    tx: &Transaction,
    ledger: &UtxoLedger,
    provisional_spent: &HashSet<UtxoId>,
) -> Result<(), ChainError> {
    let (output_amount, output_tokenids) = sum_outputs(tx.outputs.iter())?;

    let mut input_amount: Amount = 0;
    let mut input_tokenids = BTreeSet::new();
    let mut seen = HashSet::new();

    for (x, input) in tx.inputs.iter().enumerate() {
        if input.is_genesis() {
            continue;
        }

        let utxo_id = input.identifier;
        let input_tx = ledger.lookup_transaction(utxo_id)?;
        let oindex = input.oindex() as usize;
        let spent_output = input_tx
            .outputs
            .get(oindex)
            .ok_or(ChainError::OutputNotFound { utxo_id })?;

        if is_null_signature(tx.signature(x)) || tx.signer(x) != spent_output.owner() {
            return Err(ChainError::InvalidTxSignature { input_index: x });
        }

        if input_tx.is_spent(oindex)
            || provisional_spent.contains(&utxo_id)
            || !seen.insert(utxo_id)
        {
            return Err(ChainError::TxAlreadySpent { utxo_id });
        }

        match spent_output {
            TxOutput::Ft { amount, .. } => {
                input_amount = input_amount
                    .checked_add(*amount)
                    .ok_or(ChainError::AmountOverflow)?;
            }
            TxOutput::Nft { tokenids, .. } => {
                input_tokenids.extend(tokenids.iter().copied());
            }
        }
    }

    if tx.is_deposit {
        return Ok(());
    }
    if input_amount < output_amount {
        return Err(ChainError::TxAmountMismatch {
            reason: format!(
                "inputs {} less than outputs {}",
                input_amount, output_amount
            ),
        });
    }
    if input_tokenids != output_tokenids {
        return Err(ChainError::TxAmountMismatch {
            reason: format!(
                "input tokens {:?} differ from output tokens {:?}",
                input_tokenids, output_tokenids
            ),
        });
    }
    Ok(())
}

/// Total fungible value and union of token ids across outputs.
fn sum_outputs<'a>(
    outputs: impl Iterator<Item = &'a TxOutput>,
) -> Result<(Amount, BTreeSet<TokenId>), ChainError> {
    let mut amount: Amount = 0;
    let mut tokenids = BTreeSet::new();
    for output in outputs {
        match output {
            TxOutput::Ft { amount: a, .. } => {
                amount = amount.checked_add(*a).ok_or(ChainError::AmountOverflow)?;
            }
            TxOutput::Nft { tokenids: ids, .. } => tokenids.extend(ids.iter().copied()),
        }
    }
    Ok((amount, tokenids))
}
