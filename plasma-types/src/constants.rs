// ─── Block Numbering ─────────────────────────────────────────────────────────

/// Default spacing between periodic (operator) block numbers.
pub const CHILD_BLOCK_INTERVAL: u64 = 1_000;

/// First deposit block number on a fresh chain.
pub const FIRST_DEPOSIT_BLOCK: u64 = 1;

// ─── UTXO Identifier Layout ──────────────────────────────────────────────────

/// Multiplier applied to the block number in an encoded UTXO identifier.
pub const BLOCK_OFFSET: u64 = 1_000_000_000;

/// Multiplier applied to the transaction index in an encoded UTXO identifier.
pub const TX_OFFSET: u64 = 10_000;

/// Exclusive upper bound on a transaction index that still encodes uniquely.
pub const MAX_TX_INDEX: u64 = BLOCK_OFFSET / TX_OFFSET;

/// Exclusive upper bound on an output index that still encodes uniquely.
pub const MAX_OUTPUT_INDEX: u64 = TX_OFFSET;
