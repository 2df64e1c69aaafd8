use opbnb_basic_types::{GasPrice, L1ChainId};
use serde::Deserialize;

/// Base fee assumed for an L1 block without any priced transactions, in wei (3 gwei).
pub const DEFAULT_BASE_FEE: u64 = 3_000_000_000;

/// Chain ID of opBNB testnet.
pub const OPBNB_TESTNET_CHAIN_ID: u64 = 5_611;

/// Default base fee on opBNB testnet, in wei (5 gwei). Gas on its L1 has historically been pricier.
pub const DEFAULT_OPBNB_TESTNET_BASE_FEE: u64 = 5_000_000_000;

/// Percentile of the gas prices used both for per-block medians and for the final price.
pub const DEFAULT_MEDIAN_PERCENTILE: u8 = 50;

/// Number of per-block medians accumulated before a smoothed final price is read.
pub const DEFAULT_COUNT_BLOCK_SIZE: usize = 21;

/// Configuration of the synthetic L1 base fee for BSC-like L1s, which have no base fee in their headers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BscFeeConfig {
    /// Base fee (in wei) reported when there is no price signal and the chain has no override.
    #[serde(default = "BscFeeConfig::default_base_fee")]
    pub default_base_fee: u64,
    /// Chain ID with an elevated default base fee.
    #[serde(default = "BscFeeConfig::default_special_network_id")]
    pub special_network_id: u64,
    /// Default base fee (in wei) for `special_network_id`.
    #[serde(default = "BscFeeConfig::default_special_network_default_base_fee")]
    pub special_network_default_base_fee: u64,
    /// Percentile used when selecting medians; must be in `0..=100`.
    #[serde(default = "BscFeeConfig::default_median_percentile")]
    pub median_percentile: u8,
    /// Number of per-block medians in the window when the final price is read.
    #[serde(default = "BscFeeConfig::default_count_block_size")]
    pub count_block_size: usize,
}

impl Default for BscFeeConfig {
    fn default() -> Self {
        Self {
            default_base_fee: Self::default_base_fee(),
            special_network_id: Self::default_special_network_id(),
            special_network_default_base_fee: Self::default_special_network_default_base_fee(),
            median_percentile: Self::default_median_percentile(),
            count_block_size: Self::default_count_block_size(),
        }
    }
}

impl BscFeeConfig {
    fn default_base_fee() -> u64 {
        DEFAULT_BASE_FEE
    }

    fn default_special_network_id() -> u64 {
        OPBNB_TESTNET_CHAIN_ID
    }

    fn default_special_network_default_base_fee() -> u64 {
        DEFAULT_OPBNB_TESTNET_BASE_FEE
    }

    fn default_median_percentile() -> u8 {
        DEFAULT_MEDIAN_PERCENTILE
    }

    fn default_count_block_size() -> usize {
        DEFAULT_COUNT_BLOCK_SIZE
    }

    pub fn global_default_base_fee(&self) -> GasPrice {
        GasPrice::from(self.default_base_fee)
    }

    pub fn special_network_id(&self) -> L1ChainId {
        L1ChainId(self.special_network_id)
    }

    pub fn special_network_default_base_fee(&self) -> GasPrice {
        GasPrice::from(self.special_network_default_base_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_defaulted() {
        let config: BscFeeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BscFeeConfig::default());
        assert_eq!(config.global_default_base_fee(), GasPrice::from(3_000_000_000_u64));
        assert_eq!(config.special_network_id(), L1ChainId(5611));
        assert_eq!(
            config.special_network_default_base_fee(),
            GasPrice::from(5_000_000_000_u64)
        );
        assert_eq!(config.median_percentile, 50);
        assert_eq!(config.count_block_size, 21);
    }

    #[test]
    fn fields_can_be_overridden() {
        let config: BscFeeConfig = serde_json::from_str(
            r#"{ "default_base_fee": 1000000000, "median_percentile": 90, "count_block_size": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.global_default_base_fee(), GasPrice::from(1_000_000_000_u64));
        assert_eq!(config.median_percentile, 90);
        assert_eq!(config.count_block_size, 5);
        assert_eq!(config.special_network_id, OPBNB_TESTNET_CHAIN_ID);
    }
}
