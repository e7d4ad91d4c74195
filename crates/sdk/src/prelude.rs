pub use crate::client::FranciumSdk;
pub use crate::config::SdkConfig;
pub use crate::error::SdkError;
pub use francium_data::PriceProvider;
pub use francium_data::providers::{CoinGeckoProvider, FixedPriceProvider};
pub use francium_domain::metrics::{
    FarmPoolTvl, LendingPoolTvl, PoolTvl, UserFarmPosition, UserLendingPosition,
};
pub use francium_domain::value_objects::PriceMap;
pub use francium_protocols::{ChainReader, Pubkey};
