use crate::enums::{AmmKind, PoolKind};
use crate::value_objects::amount::Amount;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Static description of a lending pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingPoolDescriptor {
    /// Pool id, equal to the symbol of the lent token.
    pub id: String,
    /// Lending pool account, base58.
    pub address: String,
    /// Staking pool of the lending reward program, if the pool has one.
    #[serde(default)]
    pub reward_pool: Option<String>,
}

/// The AMM pool backing a farm's LP token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmDescriptor {
    pub kind: AmmKind,
    pub lp_mint: String,
    pub token_a: String,
    pub token_b: String,
    pub vault_a: String,
    pub vault_b: String,
}

impl AmmDescriptor {
    /// Key under which this LP token's price is published, e.g. `orca-SOL-USDC`.
    pub fn price_key(&self) -> String {
        format!("{}-{}-{}", self.kind, self.token_a, self.token_b)
    }
}

/// Static description of a leveraged farm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmPoolDescriptor {
    pub id: String,
    pub version: u8,
    /// Farm strategy account, base58.
    pub strategy: String,
    pub lp_decimals: u8,
    pub amm: AmmDescriptor,
}

/// Either kind of pool, as looked up by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolDescriptor {
    Lending(LendingPoolDescriptor),
    Farm(FarmPoolDescriptor),
}

impl PoolDescriptor {
    pub fn id(&self) -> &str {
        match self {
            PoolDescriptor::Lending(pool) => &pool.id,
            PoolDescriptor::Farm(farm) => &farm.id,
        }
    }

    pub fn kind(&self) -> PoolKind {
        match self {
            PoolDescriptor::Lending(_) => PoolKind::Lending,
            PoolDescriptor::Farm(_) => PoolKind::Farm,
        }
    }
}

/// Lending pool state as read from chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingPoolSnapshot {
    pub pool: String,
    /// Decimals of the lent token, shared by the share mint.
    pub scale: u8,
    pub available: U256,
    pub borrowed: U256,
    pub share_mint: String,
    pub total_share_supply: U256,
}

impl LendingPoolSnapshot {
    /// Deposited liquidity: available plus borrowed.
    pub fn total(&self) -> U256 {
        self.available.saturating_add(self.borrowed)
    }

    pub fn total_amount(&self) -> Amount {
        Amount::new(self.total(), self.scale)
    }

    pub fn available_amount(&self) -> Amount {
        Amount::new(self.available, self.scale)
    }

    pub fn share_supply_amount(&self) -> Amount {
        Amount::new(self.total_share_supply, self.scale)
    }
}

/// Farm strategy state as read from chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FarmPoolSnapshot {
    pub id: String,
    pub price_key: String,
    pub lp_decimals: u8,
    pub total_lp: U256,
    pub total_shares: U256,
}

impl FarmPoolSnapshot {
    pub fn total_lp_amount(&self) -> Amount {
        Amount::new(self.total_lp, self.lp_decimals)
    }
}

/// Reserves of the AMM pool behind an LP token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmReserves {
    pub price_key: String,
    pub token_a: String,
    pub token_b: String,
    pub reserve_a: Amount,
    pub reserve_b: Amount,
    pub lp_supply: Amount,
}
