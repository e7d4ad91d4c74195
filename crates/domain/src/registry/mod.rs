//! Token and pool registry.
//!
//! Tokens are compiled in. Pool descriptors and program ids are data, loaded
//! from a JSON file by `francium-data` or assembled with the builder methods.

pub mod tokens;

pub use tokens::{NATIVE_MINT, TOKENS, find_token, find_token_by_mint};

use crate::entities::pool::{FarmPoolDescriptor, LendingPoolDescriptor, PoolDescriptor};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Farms older than this version are retired on chain and never queried.
pub const MIN_FARM_VERSION: u8 = 3;

/// On-chain programs the SDK reads from, base58.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramIds {
    pub lending: String,
    pub lending_reward: String,
    pub farm: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRegistry {
    pub programs: ProgramIds,
    #[serde(default)]
    pub lending_pools: Vec<LendingPoolDescriptor>,
    #[serde(default)]
    pub farm_pools: Vec<FarmPoolDescriptor>,
}

impl PoolRegistry {
    pub fn new(programs: ProgramIds) -> Self {
        Self {
            programs,
            lending_pools: Vec::new(),
            farm_pools: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_lending_pool(mut self, pool: LendingPoolDescriptor) -> Self {
        self.lending_pools.push(pool);
        self
    }

    #[must_use]
    pub fn with_farm_pool(mut self, farm: FarmPoolDescriptor) -> Self {
        self.farm_pools.push(farm);
        self
    }

    pub fn lending_pools(&self) -> &[LendingPoolDescriptor] {
        &self.lending_pools
    }

    /// Farms at or above [`MIN_FARM_VERSION`], in registry order.
    pub fn active_farm_pools(&self) -> Vec<&FarmPoolDescriptor> {
        self.farm_pools
            .iter()
            .filter(|farm| farm.version >= MIN_FARM_VERSION)
            .collect()
    }

    /// Looks up a lending pool or active farm by id.
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownPool`] if no pool has this id.
    pub fn find(&self, id: &str) -> Result<PoolDescriptor, DomainError> {
        if let Some(pool) = self.lending_pools.iter().find(|pool| pool.id == id) {
            return Ok(PoolDescriptor::Lending(pool.clone()));
        }
        self.active_farm_pools()
            .into_iter()
            .find(|farm| farm.id == id)
            .map(|farm| PoolDescriptor::Farm(farm.clone()))
            .ok_or_else(|| DomainError::UnknownPool(id.to_string()))
    }

    /// Checks that pool ids are unique across both lists.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidRegistry`] naming the first duplicate.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        let ids = self
            .lending_pools
            .iter()
            .map(|pool| pool.id.as_str())
            .chain(self.farm_pools.iter().map(|farm| farm.id.as_str()));
        for id in ids {
            if !seen.insert(id) {
                return Err(DomainError::InvalidRegistry(format!(
                    "duplicate pool id {id}"
                )));
            }
        }
        Ok(())
    }
}
