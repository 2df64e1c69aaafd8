use std::collections::{vec_deque, VecDeque};

use opbnb_types::GasPrice;

use super::{median::select_percentile, BscFeeError, Percentile};

/// FIFO of per-block median gas prices, oldest block first.
///
/// The window has no capacity of its own: it grows by one entry per [`Self::push()`] and shrinks
/// by one per [`Self::final_gas_price()`], so its size is governed by the caller's cadence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedianWindow {
    medians: VecDeque<GasPrice>,
}

impl MedianWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            medians: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends the median of the most recently observed block.
    pub fn push(&mut self, median: GasPrice) {
        self.medians.push_back(median);
    }

    pub fn len(&self) -> usize {
        self.medians.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medians.is_empty()
    }

    /// Iterates over the medians in block arrival order.
    pub fn iter(&self) -> vec_deque::Iter<'_, GasPrice> {
        self.medians.iter()
    }

    /// Selects the value at `percentile` among the current medians without modifying the window.
    pub fn select_median(&self, percentile: Percentile) -> Result<GasPrice, BscFeeError> {
        let snapshot = self.medians.iter().cloned().collect();
        select_percentile(snapshot, percentile).ok_or(BscFeeError::EmptyWindow)
    }

    fn evict_oldest(&mut self) -> Option<GasPrice> {
        self.medians.pop_front()
    }

    /// Selects the final gas price at `percentile` and evicts the oldest median, regardless of
    /// which median was selected. Returns an error and leaves the window untouched if it is empty.
    pub fn final_gas_price(&mut self, percentile: Percentile) -> Result<GasPrice, BscFeeError> {
        let final_price = self.select_median(percentile)?;
        self.evict_oldest();
        Ok(final_price)
    }
}

impl FromIterator<GasPrice> for MedianWindow {
    fn from_iter<I: IntoIterator<Item = GasPrice>>(iter: I) -> Self {
        Self {
            medians: iter.into_iter().collect(),
        }
    }
}

impl Extend<GasPrice> for MedianWindow {
    fn extend<I: IntoIterator<Item = GasPrice>>(&mut self, iter: I) {
        self.medians.extend(iter);
    }
}
