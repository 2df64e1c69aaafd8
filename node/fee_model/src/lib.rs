//! Fee model of an opBNB node: estimation of the L1 base fee for L1s whose blocks don't carry one.

pub use crate::l1_gas_price::{
    BaseFeeOverrides, BlockInfoBscWrapper, BscFeeError, BscFeeModel, L1BaseFeeTracker,
    MedianWindow, Percentile,
};

pub mod l1_gas_price;
