use super::decode_prefix;
use crate::error::ChainError;
use borsh::{BorshDeserialize, BorshSerialize};
use francium_domain::entities::LendingPoolSnapshot;
use primitive_types::U256;
use solana_sdk::pubkey::Pubkey;

/// Decimals of wad-scaled fields.
pub const WAD_DECIMALS: usize = 18;

/// Leading fields of a lending pool account.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct LendingPoolAccount {
    pub version: u8,
    pub last_update_slot: u64,
    pub last_update_stale: u8,
    pub lending_market: [u8; 32],
    pub liquidity_mint: [u8; 32],
    pub liquidity_mint_decimals: u8,
    pub liquidity_supply: [u8; 32],
    pub liquidity_fee_receiver: [u8; 32],
    pub oracle: [u8; 32],
    pub available_amount: u64,
    pub borrowed_amount_wads: u128,
    pub cumulative_borrow_rate_wads: u128,
    pub market_price: u128,
    pub share_mint: [u8; 32],
    pub share_mint_total_supply: u64,
    pub share_supply: [u8; 32],
}

impl LendingPoolAccount {
    /// # Errors
    /// Returns [`ChainError::Decode`] if `data` is too short.
    pub fn decode(data: &[u8]) -> Result<Self, ChainError> {
        decode_prefix("lending pool", data)
    }

    /// Borrowed liquidity in token units, wad fraction dropped.
    pub fn borrowed_amount(&self) -> U256 {
        U256::from(self.borrowed_amount_wads) / U256::exp10(WAD_DECIMALS)
    }

    pub fn share_mint(&self) -> Pubkey {
        Pubkey::new_from_array(self.share_mint)
    }

    pub fn to_snapshot(&self, pool_id: &str) -> LendingPoolSnapshot {
        LendingPoolSnapshot {
            pool: pool_id.to_string(),
            scale: self.liquidity_mint_decimals,
            available: U256::from(self.available_amount),
            borrowed: self.borrowed_amount(),
            share_mint: self.share_mint().to_string(),
            total_share_supply: U256::from(self.share_mint_total_supply),
        }
    }
}
