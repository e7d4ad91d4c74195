use super::decode_prefix;
use crate::error::ChainError;
use borsh::{BorshDeserialize, BorshSerialize};
use francium_domain::entities::{FarmPoolDescriptor, FarmPoolSnapshot, UserFarmSnapshot};
use primitive_types::U256;
use solana_sdk::pubkey::Pubkey;

/// Leading fields of a leveraged farm strategy account.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct FarmStrategyAccount {
    pub version: u8,
    pub is_paused: u8,
    pub admin: [u8; 32],
    pub lp_mint: [u8; 32],
    pub lp_token_account: [u8; 32],
    /// LP tokens held by the strategy.
    pub total_lp: u64,
    /// Strategy shares issued to users.
    pub total_shares: u128,
}

impl FarmStrategyAccount {
    pub fn decode(data: &[u8]) -> Result<Self, ChainError> {
        decode_prefix("farm strategy", data)
    }

    pub fn to_snapshot(&self, farm: &FarmPoolDescriptor) -> FarmPoolSnapshot {
        FarmPoolSnapshot {
            id: farm.id.clone(),
            price_key: farm.amm.price_key(),
            lp_decimals: farm.lp_decimals,
            total_lp: U256::from(self.total_lp),
            total_shares: U256::from(self.total_shares),
        }
    }
}

/// A user's position in one farm strategy.
#[derive(BorshDeserialize, BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct UserFarmAccount {
    pub version: u8,
    pub strategy: [u8; 32],
    pub owner: [u8; 32],
    pub lp_shares: u128,
    pub borrowed_a: u64,
    pub borrowed_b: u64,
}

impl UserFarmAccount {
    pub fn decode(data: &[u8]) -> Result<Self, ChainError> {
        decode_prefix("user farm", data)
    }

    pub fn to_snapshot(&self, farm_id: &str) -> UserFarmSnapshot {
        UserFarmSnapshot {
            farm: farm_id.to_string(),
            lp_shares: U256::from(self.lp_shares),
            borrowed_a: U256::from(self.borrowed_a),
            borrowed_b: U256::from(self.borrowed_b),
        }
    }
}

/// Position account of `owner` in `strategy`.
pub fn user_farm_address(owner: &Pubkey, strategy: &Pubkey, program: &Pubkey) -> Pubkey {
    let (address, _bump) =
        Pubkey::find_program_address(&[owner.as_ref(), strategy.as_ref()], program);
    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use francium_domain::entities::AmmDescriptor;
    use francium_domain::enums::AmmKind;

    fn descriptor() -> FarmPoolDescriptor {
        FarmPoolDescriptor {
            id: "SOL-USDC".into(),
            version: 3,
            strategy: Pubkey::new_unique().to_string(),
            lp_decimals: 6,
            amm: AmmDescriptor {
                kind: AmmKind::Orca,
                lp_mint: Pubkey::new_unique().to_string(),
                token_a: "SOL".into(),
                token_b: "USDC".into(),
                vault_a: Pubkey::new_unique().to_string(),
                vault_b: Pubkey::new_unique().to_string(),
            },
        }
    }

    #[test]
    fn test_strategy_snapshot() {
        let account = FarmStrategyAccount {
            version: 3,
            is_paused: 0,
            admin: [1; 32],
            lp_mint: [2; 32],
            lp_token_account: [3; 32],
            total_lp: 77_000_000,
            total_shares: 70_000_000,
        };
        let data = borsh::to_vec(&account).unwrap();
        let snapshot = FarmStrategyAccount::decode(&data)
            .unwrap()
            .to_snapshot(&descriptor());

        assert_eq!(snapshot.id, "SOL-USDC");
        assert_eq!(snapshot.price_key, "orca-SOL-USDC");
        assert_eq!(snapshot.total_lp, U256::from(77_000_000u64));
        assert_eq!(snapshot.total_shares, U256::from(70_000_000u64));
    }

    #[test]
    fn test_user_farm_snapshot() {
        let account = UserFarmAccount {
            version: 1,
            strategy: [4; 32],
            owner: [5; 32],
            lp_shares: 1_000,
            borrowed_a: 0,
            borrowed_b: 250_000_000,
        };
        let data = borsh::to_vec(&account).unwrap();
        let snapshot = UserFarmAccount::decode(&data).unwrap().to_snapshot("SOL-USDC");

        assert_eq!(snapshot.lp_shares, U256::from(1_000u64));
        assert_eq!(snapshot.borrowed_b, U256::from(250_000_000u64));
    }
}
