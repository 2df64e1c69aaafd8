//! This module determines the L1 gas price that the derivation pipeline attributes to L1 blocks.

pub use self::bsc::{
    average_gas_price, median_gas_price, BaseFeeOverrides, BlockInfoBscWrapper, BscFeeError,
    BscFeeModel, L1BaseFeeTracker, MedianWindow, Percentile,
};

mod bsc;
