use num::ToPrimitive as _;
use opbnb_types::{GasPrice, L1ChainId};
use vise::{Counter, EncodeLabelSet, Family, Gauge, Metrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EncodeLabelSet)]
pub(super) struct ChainLabels {
    pub chain_id: u64,
}

impl From<L1ChainId> for ChainLabels {
    fn from(chain_id: L1ChainId) -> Self {
        Self {
            chain_id: chain_id.0,
        }
    }
}

#[derive(Debug, Metrics)]
#[metrics(prefix = "bsc_l1_fee")]
pub(super) struct BscFeeMetrics {
    /// Median gas price of the last observed L1 block, in wei.
    pub block_median_gas_price: Gauge<u64>,
    /// Last final gas price read from the median window, in wei.
    pub final_gas_price: Gauge<u64>,
    /// Number of per-block medians in the window of each tracked chain.
    pub window_len: Family<ChainLabels, Gauge<usize>>,
    /// Number of L1 blocks without non-zero-priced transactions.
    pub blocks_without_priced_txs: Counter,
    /// Number of final price reads from an empty median window.
    pub empty_window_reads: Counter,
}

#[vise::register]
pub(super) static METRICS: vise::Global<BscFeeMetrics> = vise::Global::new();

/// Gas prices are unbounded, so values not fitting into `u64` are logged instead of reported.
pub(super) fn report_gas_price(gauge: &Gauge<u64>, name: &str, price: &GasPrice) {
    match price.to_u64() {
        Some(price) => {
            gauge.set(price);
        }
        None => tracing::error!("Failed to report {name} = {price}, it exceeds u64::MAX"),
    }
}
