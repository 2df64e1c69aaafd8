//! The declaration of the most primitive types used by the opBNB node when it tracks its L1.
//!
//! Hash and address types are re-exported from the `web3` crate; gas prices are arbitrary-precision.

#[macro_use]
mod macros;

pub mod network;

use std::{
    fmt,
    num::ParseIntError,
    ops::{Add, Deref, DerefMut, Sub},
    str::FromStr,
};

pub use num::BigUint;
use serde::{Deserialize, Serialize};
pub use web3;
pub use web3::types::{AccessList, AccessListItem, Address, Bytes, H160, H256, U256, U64};

/// Gas price in wei. Unlike `U256`, this type has no upper bound.
pub type GasPrice = BigUint;

basic_type!(
    /// ChainId of an L1 network (BSC mainnet, BSC testnet, ...) or of an opBNB network.
    L1ChainId,
    u64
);

basic_type!(
    /// L1 network block sequential index.
    L1BlockNumber,
    u64
);

#[allow(clippy::derivable_impls)]
impl Default for L1BlockNumber {
    fn default() -> Self {
        Self(0)
    }
}

/// Converts `U256` into the corresponding `GasPrice` value.
pub fn u256_to_gas_price(value: U256) -> GasPrice {
    let mut bytes = [0u8; 32];
    value.to_little_endian(&mut bytes);
    BigUint::from_bytes_le(&bytes)
}
