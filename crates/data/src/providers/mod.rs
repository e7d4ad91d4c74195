//! Price provider implementations.

pub mod coingecko;
pub mod fixed;

pub use coingecko::CoinGeckoProvider;
pub use fixed::FixedPriceProvider;
