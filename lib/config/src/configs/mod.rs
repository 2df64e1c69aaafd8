// Public re-exports
pub use self::bsc_fee::BscFeeConfig;

pub mod bsc_fee;
