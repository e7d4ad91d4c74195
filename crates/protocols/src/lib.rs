//! Chain access for the Francium SDK.
//!
//! [`ChainReader`] is the seam between the aggregation layer and Solana:
//! it returns decoded snapshots and nothing else. [`SolanaChainReader`]
//! implements it over JSON-RPC.

pub mod error;
pub mod francium;
pub mod parsers;
pub mod prelude;
pub mod reader;
pub mod rpc;

pub use error::ChainError;
pub use reader::SolanaChainReader;
pub use solana_sdk::pubkey::Pubkey;

use async_trait::async_trait;
use francium_domain::entities::{
    AmmDescriptor, AmmReserves, FarmPoolDescriptor, FarmPoolSnapshot, LendingPoolDescriptor,
    LendingPoolSnapshot, UserFarmSnapshot, UserLendingSnapshot,
};

/// Reads pool and user state from chain.
///
/// Every call is a fresh read; implementations must not cache.
#[async_trait]
pub trait ChainReader: Send + Sync {
    async fn lending_pool(
        &self,
        pool: &LendingPoolDescriptor,
    ) -> Result<LendingPoolSnapshot, ChainError>;

    async fn farm_pool(&self, farm: &FarmPoolDescriptor) -> Result<FarmPoolSnapshot, ChainError>;

    async fn amm_reserves(&self, amm: &AmmDescriptor) -> Result<AmmReserves, ChainError>;

    /// Staked and wallet shares of `owner`. Missing accounts count as zero.
    async fn user_lending(
        &self,
        pool: &LendingPoolDescriptor,
        snapshot: &LendingPoolSnapshot,
        owner: &Pubkey,
    ) -> Result<UserLendingSnapshot, ChainError>;

    /// `None` when `owner` has no position in the farm.
    async fn user_farm(
        &self,
        farm: &FarmPoolDescriptor,
        owner: &Pubkey,
    ) -> Result<Option<UserFarmSnapshot>, ChainError>;
}
