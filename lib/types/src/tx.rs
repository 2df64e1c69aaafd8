//! L1 transaction shapes.
//!
//! BSC blocks mix legacy (single gas price) and EIP-1559 (fee cap / tip) transactions. The fee
//! model only ever looks at a single gas price per transaction, so dynamic-fee transactions are
//! priced at their fee cap, the same way `go-ethereum` reports `GasPrice()` for them.

use opbnb_basic_types::{
    u256_to_gas_price, web3, AccessList, Address, Bytes, GasPrice, L1ChainId, U256,
};

/// Transaction as seen by the fee model. The only observable attribute is its gas price.
pub trait Transaction {
    /// Gas price paid by the transaction, in wei.
    fn gas_price(&self) -> GasPrice;
}

impl<T: Transaction + ?Sized> Transaction for &T {
    fn gas_price(&self) -> GasPrice {
        (**self).gas_price()
    }
}

/// Transaction with a single gas price (pre-EIP-1559 shape).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyTx {
    pub nonce: u64,
    pub gas_price: GasPrice,
    pub gas: u64,
    /// `None` for contract creation.
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
}

impl Transaction for LegacyTx {
    fn gas_price(&self) -> GasPrice {
        self.gas_price.clone()
    }
}

/// EIP-1559 transaction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DynamicFeeTx {
    pub chain_id: Option<L1ChainId>,
    pub nonce: u64,
    pub gas_tip_cap: GasPrice,
    pub gas_fee_cap: GasPrice,
    pub gas: u64,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Bytes,
    pub access_list: AccessList,
}

impl DynamicFeeTx {
    /// Converts this transaction into the legacy shape. The fee cap becomes the gas price;
    /// chain ID, tip cap and access list are dropped.
    pub fn into_legacy(self) -> LegacyTx {
        LegacyTx {
            nonce: self.nonce,
            gas_price: self.gas_fee_cap,
            gas: self.gas,
            to: self.to,
            value: self.value,
            data: self.data,
        }
    }
}

impl From<DynamicFeeTx> for LegacyTx {
    fn from(tx: DynamicFeeTx) -> Self {
        tx.into_legacy()
    }
}

impl Transaction for DynamicFeeTx {
    fn gas_price(&self) -> GasPrice {
        self.gas_fee_cap.clone()
    }
}

/// Either of the supported transaction shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum TxData {
    Legacy(LegacyTx),
    DynamicFee(DynamicFeeTx),
}

impl TxData {
    /// Returns the legacy shape of the transaction, converting it if necessary.
    pub fn into_legacy(self) -> LegacyTx {
        match self {
            Self::Legacy(tx) => tx,
            Self::DynamicFee(tx) => tx.into_legacy(),
        }
    }
}

impl From<LegacyTx> for TxData {
    fn from(tx: LegacyTx) -> Self {
        Self::Legacy(tx)
    }
}

impl From<DynamicFeeTx> for TxData {
    fn from(tx: DynamicFeeTx) -> Self {
        Self::DynamicFee(tx)
    }
}

impl Transaction for TxData {
    fn gas_price(&self) -> GasPrice {
        match self {
            Self::Legacy(tx) => tx.gas_price(),
            Self::DynamicFee(tx) => tx.gas_price(),
        }
    }
}

/// Transactions returned by an L1 JSON-RPC node. Nodes report the effective gas price in
/// `gasPrice` for every transaction type; the fee cap is only used if it is missing.
impl Transaction for web3::types::Transaction {
    fn gas_price(&self) -> GasPrice {
        self.gas_price
            .or(self.max_fee_per_gas)
            .map(u256_to_gas_price)
            .unwrap_or_default()
    }
}

/// Message for `eth_call` / `eth_estimateGas`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallRequest {
    pub from: Address,
    pub to: Option<Address>,
    pub gas: Option<u64>,
    pub gas_price: Option<GasPrice>,
    pub gas_fee_cap: Option<GasPrice>,
    pub gas_tip_cap: Option<GasPrice>,
    pub value: Option<U256>,
    pub data: Bytes,
}

impl CallRequest {
    /// Converts this request into the legacy shape understood by BSC nodes.
    ///
    /// Only `from`, `to` and `data` are carried over; the fee cap becomes the gas price.
    /// Gas limit and value are not preserved.
    pub fn into_legacy(self) -> Self {
        Self {
            from: self.from,
            to: self.to,
            gas_price: self.gas_fee_cap,
            data: self.data,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dynamic_fee_tx() -> DynamicFeeTx {
        DynamicFeeTx {
            chain_id: Some(L1ChainId(56)),
            nonce: 7,
            gas_tip_cap: GasPrice::from(1_000_000_000_u64),
            gas_fee_cap: GasPrice::from(5_000_000_000_u64),
            gas: 21_000,
            to: Some(Address::repeat_byte(0x11)),
            value: U256::from(100),
            data: Bytes(vec![1, 2, 3]),
            access_list: vec![],
        }
    }

    #[test]
    fn dynamic_fee_tx_is_priced_at_fee_cap() {
        let tx = dynamic_fee_tx();
        assert_eq!(tx.gas_price(), GasPrice::from(5_000_000_000_u64));
        assert_eq!(TxData::from(tx).gas_price(), GasPrice::from(5_000_000_000_u64));
    }

    #[test]
    fn converting_dynamic_fee_tx_to_legacy() {
        let legacy = dynamic_fee_tx().into_legacy();
        assert_eq!(
            legacy,
            LegacyTx {
                nonce: 7,
                gas_price: GasPrice::from(5_000_000_000_u64),
                gas: 21_000,
                to: Some(Address::repeat_byte(0x11)),
                value: U256::from(100),
                data: Bytes(vec![1, 2, 3]),
            }
        );
        assert_eq!(LegacyTx::from(dynamic_fee_tx()), legacy);
        assert_eq!(TxData::from(dynamic_fee_tx()).into_legacy(), legacy);
    }

    #[test]
    fn converting_call_request_to_legacy() {
        let request = CallRequest {
            from: Address::repeat_byte(0x22),
            to: Some(Address::repeat_byte(0x33)),
            gas: Some(100_000),
            gas_price: None,
            gas_fee_cap: Some(GasPrice::from(4_000_000_000_u64)),
            gas_tip_cap: Some(GasPrice::from(1_u8)),
            value: Some(U256::from(5)),
            data: Bytes(vec![0xde, 0xad]),
        };

        let legacy = request.into_legacy();
        assert_eq!(legacy.from, Address::repeat_byte(0x22));
        assert_eq!(legacy.to, Some(Address::repeat_byte(0x33)));
        assert_eq!(legacy.gas_price, Some(GasPrice::from(4_000_000_000_u64)));
        assert_eq!(legacy.data, Bytes(vec![0xde, 0xad]));
        assert_eq!(legacy.gas, None);
        assert_eq!(legacy.value, None);
        assert_eq!(legacy.gas_fee_cap, None);
        assert_eq!(legacy.gas_tip_cap, None);
    }

    #[test]
    fn rpc_transaction_gas_price() {
        let mut tx = web3::types::Transaction {
            gas_price: Some(U256::from(3_000_000_000_u64)),
            ..Default::default()
        };
        assert_eq!(tx.gas_price(), GasPrice::from(3_000_000_000_u64));

        tx.gas_price = None;
        tx.max_fee_per_gas = Some(U256::from(7));
        assert_eq!(tx.gas_price(), GasPrice::from(7_u8));

        tx.max_fee_per_gas = None;
        assert_eq!(tx.gas_price(), GasPrice::default());
    }
}
