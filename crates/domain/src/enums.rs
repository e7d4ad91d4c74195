use serde::{Deserialize, Serialize};
use std::fmt;

/// AMM a farm's LP token is minted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmKind {
    Orca,
    Raydium,
}

impl fmt::Display for AmmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmmKind::Orca => write!(f, "orca"),
            AmmKind::Raydium => write!(f, "raydium"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Lending,
    Farm,
}
