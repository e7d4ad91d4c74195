use super::decode_prefix;
use crate::error::ChainError;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

/// A user's stake in a lending reward pool.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct UserRewardAccount {
    pub version: u8,
    pub staking_pool: [u8; 32],
    /// Lending pool shares staked.
    pub staked_amount: u64,
    pub rewards_debt: u64,
    pub rewards_debt_b: u64,
}

impl UserRewardAccount {
    pub fn decode(data: &[u8]) -> Result<Self, ChainError> {
        decode_prefix("user reward", data)
    }
}

/// Stake account of `owner` in `staking_pool`.
pub fn user_reward_address(owner: &Pubkey, staking_pool: &Pubkey, program: &Pubkey) -> Pubkey {
    let (address, _bump) =
        Pubkey::find_program_address(&[owner.as_ref(), staking_pool.as_ref()], program);
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_stake() {
        let account = UserRewardAccount {
            version: 1,
            staking_pool: [9; 32],
            staked_amount: 42_000_000,
            rewards_debt: 5,
            rewards_debt_b: 0,
        };
        let data = borsh::to_vec(&account).unwrap();
        assert_eq!(UserRewardAccount::decode(&data).unwrap().staked_amount, 42_000_000);
    }

    #[test]
    fn test_stake_address_depends_on_pool() {
        let owner = Pubkey::new_unique();
        let program = Pubkey::new_unique();
        let a = user_reward_address(&owner, &Pubkey::new_unique(), &program);
        let b = user_reward_address(&owner, &Pubkey::new_unique(), &program);
        assert_ne!(a, b);
    }
}
