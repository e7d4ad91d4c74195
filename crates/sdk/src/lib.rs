//! Francium SDK: TVL, APY and position aggregation for Francium lending
//! and farm pools.
//!
//! [`FranciumSdk`] combines a [`ChainReader`](francium_protocols::ChainReader),
//! a [`PriceProvider`](francium_data::PriceProvider) and a
//! [`PoolRegistry`](francium_domain::registry::PoolRegistry). Each call reads
//! fresh state; nothing is cached between calls.

pub mod client;
pub mod config;
pub mod error;
pub mod prelude;

pub use client::FranciumSdk;
pub use config::SdkConfig;
pub use error::SdkError;
