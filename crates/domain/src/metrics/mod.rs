//! Priced metrics derived from pool snapshots.
//!
//! Every function here is pure: snapshots and prices in, records out. A
//! missing price values the affected metric at zero; zero denominators
//! produce `None` or zero as documented on each field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod lp_price;
pub mod position;
pub mod tvl;

pub use lp_price::lp_price;
pub use position::{share_price, user_farm_position, user_lending_position};
pub use tvl::{farm_pool_tvl, lending_pool_tvl};

use crate::error::DomainError;

/// Turns the `None` of a checked `Decimal` operation into an overflow error.
fn checked(value: Option<Decimal>, metric: &'static str) -> Result<Decimal, DomainError> {
    value.ok_or(DomainError::ValueOverflow(metric))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendingPoolTvl {
    pub id: String,
    /// Daily-compounded APY, in percent.
    pub apy: Decimal,
    pub apr: Decimal,
    pub utilization: Decimal,
    pub liquidity_locked: Decimal,
    pub available: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmPoolTvl {
    pub id: String,
    pub lp_amount: Decimal,
    pub liquidity_locked: Decimal,
}

/// Either kind of TVL record, for lookups by pool id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolTvl {
    Lending(LendingPoolTvl),
    Farm(FarmPoolTvl),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLendingPosition {
    pub pool: String,
    pub scale: u8,
    /// Staked shares.
    pub reward_position: Decimal,
    /// Wallet shares.
    pub balance_position: Decimal,
    pub total_position: Decimal,
    /// Underlying tokens per share; `None` while the pool has no shares.
    pub share_price: Option<Decimal>,
    /// Underlying tokens the shares redeem for.
    pub total_amount: Decimal,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserFarmPosition {
    pub farm: String,
    pub lp_amount: Decimal,
    pub position_value: Decimal,
    pub debt_value: Decimal,
    pub equity_value: Decimal,
    /// Position value over equity; `None` when equity is not positive.
    pub leverage: Option<Decimal>,
}
