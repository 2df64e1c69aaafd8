//! Synthetic base fee for BSC-like L1s.
//!
//! BSC block headers have no EIP-1559 base fee, so one is derived from the gas prices paid by the
//! transactions of recent L1 blocks. Each block is reduced to the median of its non-zero gas
//! prices; the per-block medians are then collected in a [`MedianWindow`], and the median of the
//! window is reported as the final price. Reading the final price evicts the oldest block from
//! the window, so a single outlier block can't move the estimate on its own.

use opbnb_config::BscFeeConfig;
use opbnb_types::{network::Network, BlockInfo, GasPrice, L1ChainId, Transaction};

pub use self::{
    block_info::BlockInfoBscWrapper,
    median::{average_gas_price, median_gas_price},
    networks::BaseFeeOverrides,
    window::MedianWindow,
};
use self::{
    median::select_block_median,
    metrics::{report_gas_price, ChainLabels, METRICS},
};

mod block_info;
mod median;
mod metrics;
mod networks;
mod window;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BscFeeError {
    /// The final price was requested while the median window was empty. The window is left as is.
    #[error("invalid state: median window is empty")]
    EmptyWindow,
    #[error("percentile must be in 0..=100, got {0}")]
    InvalidPercentile(u8),
    #[error("count block size must be positive")]
    ZeroCountBlockSize,
}

/// Percentile used to select a value from a set of gas prices. `Percentile::MEDIAN` selects the
/// lower median for sets of even size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Percentile(u8);

impl Percentile {
    pub const MEDIAN: Self = Self(50);

    pub fn new(value: u8) -> Result<Self, BscFeeError> {
        if value > 100 {
            return Err(BscFeeError::InvalidPercentile(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Rank of the selected value among `len > 0` ascending values.
    fn rank(self, len: usize) -> usize {
        (len - 1) * usize::from(self.0) / 100
    }
}

impl Default for Percentile {
    fn default() -> Self {
        Self::MEDIAN
    }
}

impl TryFrom<u8> for Percentile {
    type Error = BscFeeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Fee model for BSC-like L1s: per-block medians, final price selection and the fallback policy.
#[derive(Debug, Clone)]
pub struct BscFeeModel {
    percentile: Percentile,
    overrides: BaseFeeOverrides,
}

impl Default for BscFeeModel {
    fn default() -> Self {
        Self::with_overrides(Percentile::MEDIAN, BaseFeeOverrides::default())
    }
}

impl BscFeeModel {
    pub fn new(config: &BscFeeConfig) -> Result<Self, BscFeeError> {
        let percentile = Percentile::new(config.median_percentile)?;
        Ok(Self::with_overrides(
            percentile,
            BaseFeeOverrides::from_config(config),
        ))
    }

    pub fn with_overrides(percentile: Percentile, overrides: BaseFeeOverrides) -> Self {
        Self {
            percentile,
            overrides,
        }
    }

    pub fn percentile(&self) -> Percentile {
        self.percentile
    }

    pub fn overrides(&self) -> &BaseFeeOverrides {
        &self.overrides
    }

    /// Returns the median gas price of the non-zero-priced `transactions` of a single block,
    /// or the global default base fee if there are none.
    pub fn median_gas_price<T: Transaction>(
        &self,
        transactions: impl IntoIterator<Item = T>,
    ) -> GasPrice {
        let median = match select_block_median(transactions, self.percentile) {
            Some(median) => median,
            None => {
                METRICS.blocks_without_priced_txs.inc();
                tracing::debug!("Block has no priced transactions; using default base fee");
                self.overrides.default_base_fee().clone()
            }
        };
        tracing::debug!(%median, "Computed block median gas price");
        report_gas_price(&METRICS.block_median_gas_price, "block_median_gas_price", &median);
        median
    }

    /// Returns the average gas price of the non-zero-priced `transactions` of a single block,
    /// or the global default base fee if there are none.
    pub fn average_gas_price<T: Transaction>(
        &self,
        transactions: impl IntoIterator<Item = T>,
    ) -> GasPrice {
        average_gas_price(transactions, self.overrides.default_base_fee())
    }

    /// Returns the default base fee for the given chain.
    pub fn base_fee_by_network(&self, chain_id: L1ChainId) -> GasPrice {
        self.overrides.base_fee_by_network(chain_id).clone()
    }

    /// Selects the final gas price from `window` and evicts its oldest entry.
    pub fn final_gas_price(&self, window: &mut MedianWindow) -> Result<GasPrice, BscFeeError> {
        let final_price = window.final_gas_price(self.percentile).inspect_err(|_| {
            METRICS.empty_window_reads.inc();
            tracing::warn!("Requested final gas price from an empty median window");
        })?;
        report_gas_price(&METRICS.final_gas_price, "final_gas_price", &final_price);
        Ok(final_price)
    }
}

/// Tracks the synthetic base fee of a single L1 chain.
///
/// For every observed L1 block, the per-block median is pushed into the window. Once the window
/// holds `count_block_size` medians, each further block reads (and shrinks the window by) one
/// final price; before that, the network default is reported. Accesses must be serialized by
/// the caller; use one tracker per tracked chain.
#[derive(Debug)]
pub struct L1BaseFeeTracker {
    model: BscFeeModel,
    window: MedianWindow,
    count_block_size: usize,
    is_warmed_up: bool,
}

impl L1BaseFeeTracker {
    pub fn new(config: &BscFeeConfig) -> Result<Self, BscFeeError> {
        Self::with_model(BscFeeModel::new(config)?, config.count_block_size)
    }

    pub fn with_model(model: BscFeeModel, count_block_size: usize) -> Result<Self, BscFeeError> {
        if count_block_size == 0 {
            return Err(BscFeeError::ZeroCountBlockSize);
        }
        Ok(Self {
            model,
            window: MedianWindow::with_capacity(count_block_size),
            count_block_size,
            is_warmed_up: false,
        })
    }

    pub fn model(&self) -> &BscFeeModel {
        &self.model
    }

    pub fn window(&self) -> &MedianWindow {
        &self.window
    }

    /// Pushes the median of an L1 block and returns the base fee to attribute to that block.
    pub fn observe_median(
        &mut self,
        chain_id: L1ChainId,
        median: GasPrice,
    ) -> Result<GasPrice, BscFeeError> {
        let window_len = &METRICS.window_len[&ChainLabels::from(chain_id)];
        self.window.push(median);

        if self.window.len() < self.count_block_size {
            window_len.set(self.window.len());
            return Ok(self.model.base_fee_by_network(chain_id));
        }
        if !self.is_warmed_up {
            tracing::info!(
                %chain_id,
                network = %Network::from_chain_id(chain_id),
                count_block_size = self.count_block_size,
                "Median window is full; switching to smoothed L1 gas price"
            );
            self.is_warmed_up = true;
        }
        let final_price = self.model.final_gas_price(&mut self.window);
        window_len.set(self.window.len());
        final_price
    }

    /// Observes an L1 block with its `transactions` and returns its metadata annotated with
    /// the synthetic base fee.
    pub fn observe_block<I: BlockInfo, T: Transaction>(
        &mut self,
        chain_id: L1ChainId,
        block_info: I,
        transactions: impl IntoIterator<Item = T>,
    ) -> Result<BlockInfoBscWrapper<I>, BscFeeError> {
        let median = self.model.median_gas_price(transactions);
        let base_fee = self.observe_median(chain_id, median)?;
        tracing::debug!(
            %chain_id,
            block_number = %block_info.number(),
            %base_fee,
            "Attributed base fee to L1 block"
        );
        Ok(BlockInfoBscWrapper::new(block_info, base_fee))
    }
}
