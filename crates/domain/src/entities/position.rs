use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// A user's share tokens in one lending pool, in raw share units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLendingSnapshot {
    pub pool: String,
    /// Shares staked in the lending reward program.
    pub reward_shares: U256,
    /// Shares held in the user's wallet.
    pub balance_shares: U256,
}

impl UserLendingSnapshot {
    pub fn empty(pool: impl Into<String>) -> Self {
        Self {
            pool: pool.into(),
            reward_shares: U256::zero(),
            balance_shares: U256::zero(),
        }
    }

    pub fn total_shares(&self) -> U256 {
        self.reward_shares.saturating_add(self.balance_shares)
    }
}

/// A user's leveraged farm position, in raw units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFarmSnapshot {
    pub farm: String,
    pub lp_shares: U256,
    /// Debt in the AMM's token A, in that token's raw units.
    pub borrowed_a: U256,
    /// Debt in the AMM's token B, in that token's raw units.
    pub borrowed_b: U256,
}
