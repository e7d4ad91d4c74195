use francium_data::{PriceError, RegistryError};
use francium_domain::DomainError;
use francium_protocols::ChainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Price(#[from] PriceError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
