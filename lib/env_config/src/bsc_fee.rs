use opbnb_config::BscFeeConfig;

use crate::{envy_load, FromEnv};

impl FromEnv for BscFeeConfig {
    fn from_env() -> anyhow::Result<Self> {
        envy_load("bsc_fee", "BSC_FEE_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::EnvMutex;

    static MUTEX: EnvMutex = EnvMutex::new();

    const ALL_VARS: &[&str] = &[
        "BSC_FEE_DEFAULT_BASE_FEE",
        "BSC_FEE_SPECIAL_NETWORK_ID",
        "BSC_FEE_SPECIAL_NETWORK_DEFAULT_BASE_FEE",
        "BSC_FEE_MEDIAN_PERCENTILE",
        "BSC_FEE_COUNT_BLOCK_SIZE",
    ];

    #[test]
    fn from_env_bsc_fee() {
        let mut lock = MUTEX.lock();
        let config = r#"
            BSC_FEE_DEFAULT_BASE_FEE=1000000000
            BSC_FEE_SPECIAL_NETWORK_ID=97
            BSC_FEE_SPECIAL_NETWORK_DEFAULT_BASE_FEE=10000000000
            BSC_FEE_MEDIAN_PERCENTILE=60
            BSC_FEE_COUNT_BLOCK_SIZE=11
        "#;
        lock.set_env(config);

        let actual = BscFeeConfig::from_env().unwrap();
        assert_eq!(
            actual,
            BscFeeConfig {
                default_base_fee: 1_000_000_000,
                special_network_id: 97,
                special_network_default_base_fee: 10_000_000_000,
                median_percentile: 60,
                count_block_size: 11,
            }
        );
    }

    #[test]
    fn from_env_bsc_fee_defaults() {
        let mut lock = MUTEX.lock();
        lock.remove_env(ALL_VARS);

        let actual = BscFeeConfig::from_env().unwrap();
        assert_eq!(actual, BscFeeConfig::default());
    }

    #[test]
    fn from_env_bsc_fee_malformed_value() {
        let mut lock = MUTEX.lock();
        lock.remove_env(ALL_VARS);
        lock.set_env("BSC_FEE_MEDIAN_PERCENTILE=half");

        let err = BscFeeConfig::from_env().unwrap_err();
        assert!(format!("{err:#}").contains("bsc_fee"), "{err:#}");
    }
}
