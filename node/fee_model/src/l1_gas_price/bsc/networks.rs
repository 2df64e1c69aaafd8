use std::collections::HashMap;

use opbnb_config::BscFeeConfig;
use opbnb_types::{GasPrice, L1ChainId};

/// Default base fees per chain, used when there is no price signal yet.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseFeeOverrides {
    default_base_fee: GasPrice,
    by_chain: HashMap<L1ChainId, GasPrice>,
}

impl Default for BaseFeeOverrides {
    fn default() -> Self {
        Self::from_config(&BscFeeConfig::default())
    }
}

impl BaseFeeOverrides {
    /// Creates a table without overrides, so every chain maps to `default_base_fee`.
    pub fn new(default_base_fee: GasPrice) -> Self {
        Self {
            default_base_fee,
            by_chain: HashMap::new(),
        }
    }

    pub fn from_config(config: &BscFeeConfig) -> Self {
        Self::new(config.global_default_base_fee()).with_override(
            config.special_network_id(),
            config.special_network_default_base_fee(),
        )
    }

    pub fn with_override(mut self, chain_id: L1ChainId, base_fee: GasPrice) -> Self {
        self.by_chain.insert(chain_id, base_fee);
        self
    }

    /// Returns the global default base fee.
    pub fn default_base_fee(&self) -> &GasPrice {
        &self.default_base_fee
    }

    /// Returns the base fee for `chain_id`, falling back to the global default for chains
    /// without an override.
    pub fn base_fee_by_network(&self, chain_id: L1ChainId) -> &GasPrice {
        self.by_chain
            .get(&chain_id)
            .unwrap_or(&self.default_base_fee)
    }
}
