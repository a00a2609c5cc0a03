//! Validation and ordering core for the Plasma child chain.
//!
//! Admits periodic and deposit blocks in slot order, buffers blocks whose
//! predecessor has not arrived, validates signatures, double spends and
//! value conservation, and applies admitted blocks to an in-memory UTXO ledger.

pub mod block;
pub mod buffer;
pub mod chain;
pub mod config;
pub mod ledger;
pub mod validation;
