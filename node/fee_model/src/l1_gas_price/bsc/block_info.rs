use opbnb_types::{Address, BlockInfo, GasPrice, L1BlockNumber, H256};

/// Block metadata reporting a synthetic base fee instead of the wrapped one. All other
/// accessors are forwarded to the wrapped metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockInfoBscWrapper<I> {
    inner: I,
    base_fee: GasPrice,
}

impl<I> BlockInfoBscWrapper<I> {
    pub fn new(inner: I, base_fee: GasPrice) -> Self {
        Self { inner, base_fee }
    }

    pub fn inner(&self) -> &I {
        &self.inner
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: BlockInfo> BlockInfo for BlockInfoBscWrapper<I> {
    fn hash(&self) -> H256 {
        self.inner.hash()
    }

    fn parent_hash(&self) -> H256 {
        self.inner.parent_hash()
    }

    fn coinbase(&self) -> Address {
        self.inner.coinbase()
    }

    fn root(&self) -> H256 {
        self.inner.root()
    }

    fn number(&self) -> L1BlockNumber {
        self.inner.number()
    }

    fn time(&self) -> u64 {
        self.inner.time()
    }

    fn mix_digest(&self) -> H256 {
        self.inner.mix_digest()
    }

    fn base_fee(&self) -> Option<GasPrice> {
        Some(self.base_fee.clone())
    }

    fn receipt_hash(&self) -> H256 {
        self.inner.receipt_hash()
    }

    fn gas_used(&self) -> u64 {
        self.inner.gas_used()
    }

    fn gas_limit(&self) -> u64 {
        self.inner.gas_limit()
    }
}
