//! opBNB types: L1 transaction shapes and L1 block metadata as seen by an opBNB node.
//!
//! Only the attributes needed to price L1 data are modeled here; the rest of the transaction
//! and header contents are carried through unchanged.

#![allow(clippy::upper_case_acronyms, clippy::derive_partial_eq_without_eq)]

pub use opbnb_basic_types::*;

pub use crate::{
    block::{BlockInfo, L1BlockHeader},
    tx::{CallRequest, DynamicFeeTx, LegacyTx, Transaction, TxData},
};

pub mod block;
pub mod tx;
