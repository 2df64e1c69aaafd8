use std::mem;

use num::Zero as _;
use opbnb_types::{GasPrice, Transaction};

use super::Percentile;

/// Collects gas prices of the `transactions` that pay a non-zero price. Zero-priced
/// transactions (e.g., system transactions on BSC) carry no price signal.
pub(super) fn non_zero_gas_prices<T: Transaction>(
    transactions: impl IntoIterator<Item = T>,
) -> Vec<GasPrice> {
    transactions
        .into_iter()
        .map(|tx| tx.gas_price())
        .filter(|price| !price.is_zero())
        .collect()
}

/// Selects the value at `percentile` among `prices` in ascending order, or `None` if there are
/// no prices. The selected value is always one of `prices`; there's no interpolation.
pub(super) fn select_percentile(
    mut prices: Vec<GasPrice>,
    percentile: Percentile,
) -> Option<GasPrice> {
    if prices.is_empty() {
        return None;
    }
    let rank = percentile.rank(prices.len());
    let (_, selected, _) = prices.select_nth_unstable(rank);
    Some(mem::take(selected))
}

/// Selects the gas price at `percentile` among the non-zero-priced `transactions` of a block.
/// Returns `None` if the block has no such transactions.
pub(super) fn select_block_median<T: Transaction>(
    transactions: impl IntoIterator<Item = T>,
    percentile: Percentile,
) -> Option<GasPrice> {
    select_percentile(non_zero_gas_prices(transactions), percentile)
}

/// Returns the gas price at `percentile` among the non-zero-priced `transactions` of a block,
/// or `default_base_fee` if there are none.
pub fn median_gas_price<T: Transaction>(
    transactions: impl IntoIterator<Item = T>,
    percentile: Percentile,
    default_base_fee: &GasPrice,
) -> GasPrice {
    select_block_median(transactions, percentile).unwrap_or_else(|| default_base_fee.clone())
}

/// Returns the average (rounded down) of the non-zero gas prices of `transactions`,
/// or `default_base_fee` if there are none.
pub fn average_gas_price<T: Transaction>(
    transactions: impl IntoIterator<Item = T>,
    default_base_fee: &GasPrice,
) -> GasPrice {
    let prices = non_zero_gas_prices(transactions);
    if prices.is_empty() {
        return default_base_fee.clone();
    }
    let count = GasPrice::from(prices.len());
    prices.into_iter().sum::<GasPrice>() / count
}
