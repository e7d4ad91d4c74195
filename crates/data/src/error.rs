use francium_domain::DomainError;
use thiserror::Error;

/// Errors raised while fetching price quotes.
#[derive(Debug, Error)]
pub enum PriceError {
    #[error("price request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read price file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed price data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while loading a pool registry file.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed registry: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
