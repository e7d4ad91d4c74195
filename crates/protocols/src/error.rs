use francium_domain::DomainError;
use solana_client::client_error::ClientError;
use thiserror::Error;

/// Errors raised while reading and decoding chain state.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The RPC call itself failed. Passed through untouched.
    #[error(transparent)]
    Rpc(#[from] ClientError),

    #[error("account {0} not found")]
    AccountNotFound(String),

    #[error("account {address} is owned by {owner}, not the expected program")]
    UnexpectedOwner { address: String, owner: String },

    #[error("invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("failed to decode {account} account: {reason}")]
    Decode {
        account: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
