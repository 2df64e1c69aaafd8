use std::{fmt, sync::Arc};

use opbnb_basic_types::{u256_to_gas_price, web3, Address, GasPrice, L1BlockNumber, H256, U256};

/// Read-only view of an L1 block header, as consumed by the derivation pipeline.
pub trait BlockInfo: fmt::Debug + Send + Sync {
    fn hash(&self) -> H256;
    fn parent_hash(&self) -> H256;
    fn coinbase(&self) -> Address;
    fn root(&self) -> H256;
    fn number(&self) -> L1BlockNumber;
    fn time(&self) -> u64;
    /// Returns the RANDAO value of the block (`mixHash`).
    fn mix_digest(&self) -> H256;
    /// Returns the EIP-1559 base fee of the block, or `None` if the chain doesn't have one.
    fn base_fee(&self) -> Option<GasPrice>;
    fn receipt_hash(&self) -> H256;
    fn gas_used(&self) -> u64;
    fn gas_limit(&self) -> u64;
}

impl<T: BlockInfo + ?Sized> BlockInfo for Box<T> {
    fn hash(&self) -> H256 {
        (**self).hash()
    }

    fn parent_hash(&self) -> H256 {
        (**self).parent_hash()
    }

    fn coinbase(&self) -> Address {
        (**self).coinbase()
    }

    fn root(&self) -> H256 {
        (**self).root()
    }

    fn number(&self) -> L1BlockNumber {
        (**self).number()
    }

    fn time(&self) -> u64 {
        (**self).time()
    }

    fn mix_digest(&self) -> H256 {
        (**self).mix_digest()
    }

    fn base_fee(&self) -> Option<GasPrice> {
        (**self).base_fee()
    }

    fn receipt_hash(&self) -> H256 {
        (**self).receipt_hash()
    }

    fn gas_used(&self) -> u64 {
        (**self).gas_used()
    }

    fn gas_limit(&self) -> u64 {
        (**self).gas_limit()
    }
}

impl<T: BlockInfo + ?Sized> BlockInfo for Arc<T> {
    fn hash(&self) -> H256 {
        (**self).hash()
    }

    fn parent_hash(&self) -> H256 {
        (**self).parent_hash()
    }

    fn coinbase(&self) -> Address {
        (**self).coinbase()
    }

    fn root(&self) -> H256 {
        (**self).root()
    }

    fn number(&self) -> L1BlockNumber {
        (**self).number()
    }

    fn time(&self) -> u64 {
        (**self).time()
    }

    fn mix_digest(&self) -> H256 {
        (**self).mix_digest()
    }

    fn base_fee(&self) -> Option<GasPrice> {
        (**self).base_fee()
    }

    fn receipt_hash(&self) -> H256 {
        (**self).receipt_hash()
    }

    fn gas_used(&self) -> u64 {
        (**self).gas_used()
    }

    fn gas_limit(&self) -> u64 {
        (**self).gas_limit()
    }
}

/// Plain L1 block header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct L1BlockHeader {
    pub hash: H256,
    pub parent_hash: H256,
    pub coinbase: Address,
    pub root: H256,
    pub number: L1BlockNumber,
    pub timestamp: u64,
    pub mix_digest: H256,
    /// BSC blocks don't carry a base fee.
    pub base_fee: Option<GasPrice>,
    pub receipt_hash: H256,
    pub gas_used: u64,
    pub gas_limit: u64,
}

impl BlockInfo for L1BlockHeader {
    fn hash(&self) -> H256 {
        self.hash
    }

    fn parent_hash(&self) -> H256 {
        self.parent_hash
    }

    fn coinbase(&self) -> Address {
        self.coinbase
    }

    fn root(&self) -> H256 {
        self.root
    }

    fn number(&self) -> L1BlockNumber {
        self.number
    }

    fn time(&self) -> u64 {
        self.timestamp
    }

    fn mix_digest(&self) -> H256 {
        self.mix_digest
    }

    fn base_fee(&self) -> Option<GasPrice> {
        self.base_fee.clone()
    }

    fn receipt_hash(&self) -> H256 {
        self.receipt_hash
    }

    fn gas_used(&self) -> u64 {
        self.gas_used
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }
}

/// Narrows a header quantity to `u64`, saturating values that don't fit.
fn saturating_u64(value: U256) -> u64 {
    if value > U256::from(u64::MAX) {
        u64::MAX
    } else {
        value.as_u64()
    }
}

/// Header fields of a block returned by an L1 JSON-RPC node. Pending blocks have neither a hash
/// nor a number; those are mapped to their zero values.
impl<TX> From<&web3::types::Block<TX>> for L1BlockHeader {
    fn from(block: &web3::types::Block<TX>) -> Self {
        Self {
            hash: block.hash.unwrap_or_default(),
            parent_hash: block.parent_hash,
            coinbase: block.author,
            root: block.state_root,
            number: L1BlockNumber(block.number.map_or(0, |number| number.as_u64())),
            timestamp: saturating_u64(block.timestamp),
            mix_digest: block.mix_hash.unwrap_or_default(),
            base_fee: block.base_fee_per_gas.map(u256_to_gas_price),
            receipt_hash: block.receipts_root,
            gas_used: saturating_u64(block.gas_used),
            gas_limit: saturating_u64(block.gas_limit),
        }
    }
}
