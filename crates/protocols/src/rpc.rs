//! Thin async wrapper over the Solana RPC client.

use crate::error::ChainError;
use francium_domain::value_objects::Amount;
use primitive_types::U256;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::time::Duration;
use tracing::debug;

/// Connection settings for [`RpcProvider`].
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub url: String,
    pub commitment: CommitmentConfig,
    pub timeout: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "https://api.mainnet-beta.solana.com".to_string(),
            commitment: CommitmentConfig::confirmed(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Read-only access to accounts and token balances.
pub struct RpcProvider {
    client: RpcClient,
    commitment: CommitmentConfig,
}

impl RpcProvider {
    pub fn new(config: RpcConfig) -> Self {
        debug!(url = %config.url, commitment = ?config.commitment.commitment, "Creating RPC provider");
        Self {
            client: RpcClient::new_with_timeout_and_commitment(
                config.url,
                config.timeout,
                config.commitment,
            ),
            commitment: config.commitment,
        }
    }

    /// Data of an account, `None` if it does not exist.
    ///
    /// # Errors
    /// Returns [`ChainError::Rpc`] if the request fails.
    pub async fn get_account_data(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ChainError> {
        let response = self
            .client
            .get_account_with_commitment(address, self.commitment)
            .await?;
        debug!(address = %address, slot = response.context.slot, found = response.value.is_some(), "Fetched account");
        Ok(response.value.map(|account| account.data))
    }

    /// Data of an account that must exist and be owned by `program`.
    ///
    /// # Errors
    /// Returns [`ChainError::AccountNotFound`] if the account is missing and
    /// [`ChainError::UnexpectedOwner`] if another program owns it.
    pub async fn require_program_account(
        &self,
        address: &Pubkey,
        program: &Pubkey,
    ) -> Result<Vec<u8>, ChainError> {
        let account = self
            .client
            .get_account_with_commitment(address, self.commitment)
            .await?
            .value
            .ok_or_else(|| ChainError::AccountNotFound(address.to_string()))?;
        if account.owner != *program {
            return Err(ChainError::UnexpectedOwner {
                address: address.to_string(),
                owner: account.owner.to_string(),
            });
        }
        Ok(account.data)
    }

    /// Balance of an SPL token account with its mint's decimals.
    ///
    /// # Errors
    /// Returns [`ChainError::Rpc`] if the request fails or the account is
    /// not a token account.
    pub async fn get_token_account_balance(&self, address: &Pubkey) -> Result<Amount, ChainError> {
        let balance = self
            .client
            .get_token_account_balance_with_commitment(address, self.commitment)
            .await?
            .value;
        ui_amount(&balance.amount, balance.decimals)
    }

    /// Circulating supply of an SPL mint.
    ///
    /// # Errors
    /// Returns [`ChainError::Rpc`] if the request fails.
    pub async fn get_token_supply(&self, mint: &Pubkey) -> Result<Amount, ChainError> {
        let supply = self
            .client
            .get_token_supply_with_commitment(mint, self.commitment)
            .await?
            .value;
        ui_amount(&supply.amount, supply.decimals)
    }
}

/// Parses the raw integer string RPC returns for token amounts.
fn ui_amount(raw: &str, decimals: u8) -> Result<Amount, ChainError> {
    let raw = U256::from_dec_str(raw).map_err(|e| ChainError::Decode {
        account: "token amount",
        reason: format!("{raw}: {e:?}"),
    })?;
    Ok(Amount::new(raw, decimals))
}
