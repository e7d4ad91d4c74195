//! [`ChainReader`] over Solana JSON-RPC.

use crate::error::ChainError;
use crate::francium::farm::{FarmStrategyAccount, UserFarmAccount, user_farm_address};
use crate::francium::lending_pool::LendingPoolAccount;
use crate::francium::reward::{UserRewardAccount, user_reward_address};
use crate::parsers::{associated_token_address, parse_pubkey, token_account_amount};
use crate::rpc::RpcProvider;
use crate::ChainReader;
use async_trait::async_trait;
use francium_domain::entities::{
    AmmDescriptor, AmmReserves, FarmPoolDescriptor, FarmPoolSnapshot, LendingPoolDescriptor,
    LendingPoolSnapshot, UserFarmSnapshot, UserLendingSnapshot,
};
use francium_domain::registry::ProgramIds;
use primitive_types::U256;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::debug;

/// Program ids, parsed once.
#[derive(Debug, Clone, Copy)]
struct Programs {
    lending: Pubkey,
    lending_reward: Pubkey,
    farm: Pubkey,
}

pub struct SolanaChainReader {
    provider: Arc<RpcProvider>,
    programs: Programs,
}

impl SolanaChainReader {
    /// # Errors
    /// Returns [`ChainError::InvalidAddress`] if a program id does not parse.
    pub fn new(provider: Arc<RpcProvider>, programs: &ProgramIds) -> Result<Self, ChainError> {
        Ok(Self {
            provider,
            programs: Programs {
                lending: parse_pubkey(&programs.lending)?,
                lending_reward: parse_pubkey(&programs.lending_reward)?,
                farm: parse_pubkey(&programs.farm)?,
            },
        })
    }

    async fn share_balance(&self, owner: &Pubkey, share_mint: &str) -> Result<U256, ChainError> {
        let mint = parse_pubkey(share_mint)?;
        let account = associated_token_address(owner, &mint)?;
        match self.provider.get_account_data(&account).await? {
            Some(data) => Ok(U256::from(token_account_amount(&data)?)),
            None => Ok(U256::zero()),
        }
    }

    async fn staked_shares(&self, owner: &Pubkey, reward_pool: &str) -> Result<U256, ChainError> {
        let pool = parse_pubkey(reward_pool)?;
        let account = user_reward_address(owner, &pool, &self.programs.lending_reward);
        match self.provider.get_account_data(&account).await? {
            Some(data) => Ok(U256::from(UserRewardAccount::decode(&data)?.staked_amount)),
            None => Ok(U256::zero()),
        }
    }
}

#[async_trait]
impl ChainReader for SolanaChainReader {
    async fn lending_pool(
        &self,
        pool: &LendingPoolDescriptor,
    ) -> Result<LendingPoolSnapshot, ChainError> {
        let address = parse_pubkey(&pool.address)?;
        let data = self
            .provider
            .require_program_account(&address, &self.programs.lending)
            .await?;
        let account = LendingPoolAccount::decode(&data)?;
        debug!(
            pool = %pool.id,
            available = account.available_amount,
            share_supply = account.share_mint_total_supply,
            "Decoded lending pool"
        );
        Ok(account.to_snapshot(&pool.id))
    }

    async fn farm_pool(&self, farm: &FarmPoolDescriptor) -> Result<FarmPoolSnapshot, ChainError> {
        let address = parse_pubkey(&farm.strategy)?;
        let data = self
            .provider
            .require_program_account(&address, &self.programs.farm)
            .await?;
        let account = FarmStrategyAccount::decode(&data)?;
        debug!(farm = %farm.id, total_lp = account.total_lp, "Decoded farm strategy");
        Ok(account.to_snapshot(farm))
    }

    async fn amm_reserves(&self, amm: &AmmDescriptor) -> Result<AmmReserves, ChainError> {
        let reserve_a = self
            .provider
            .get_token_account_balance(&parse_pubkey(&amm.vault_a)?)
            .await?;
        let reserve_b = self
            .provider
            .get_token_account_balance(&parse_pubkey(&amm.vault_b)?)
            .await?;
        let lp_supply = self
            .provider
            .get_token_supply(&parse_pubkey(&amm.lp_mint)?)
            .await?;
        debug!(amm = %amm.price_key(), %reserve_a, %reserve_b, %lp_supply, "Fetched AMM reserves");

        Ok(AmmReserves {
            price_key: amm.price_key(),
            token_a: amm.token_a.clone(),
            token_b: amm.token_b.clone(),
            reserve_a,
            reserve_b,
            lp_supply,
        })
    }

    async fn user_lending(
        &self,
        pool: &LendingPoolDescriptor,
        snapshot: &LendingPoolSnapshot,
        owner: &Pubkey,
    ) -> Result<UserLendingSnapshot, ChainError> {
        let balance_shares = self.share_balance(owner, &snapshot.share_mint).await?;
        let reward_shares = match &pool.reward_pool {
            Some(reward_pool) => self.staked_shares(owner, reward_pool).await?,
            None => U256::zero(),
        };
        Ok(UserLendingSnapshot {
            pool: pool.id.clone(),
            reward_shares,
            balance_shares,
        })
    }

    async fn user_farm(
        &self,
        farm: &FarmPoolDescriptor,
        owner: &Pubkey,
    ) -> Result<Option<UserFarmSnapshot>, ChainError> {
        let strategy = parse_pubkey(&farm.strategy)?;
        let address = user_farm_address(owner, &strategy, &self.programs.farm);
        let Some(data) = self.provider.get_account_data(&address).await? else {
            return Ok(None);
        };
        let account = UserFarmAccount::decode(&data)?;
        Ok(Some(account.to_snapshot(&farm.id)))
    }
}
