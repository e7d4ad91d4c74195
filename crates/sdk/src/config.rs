//! SDK configuration.

use crate::error::SdkError;
use francium_data::providers::coingecko::DEFAULT_BASE_URL;
use francium_protocols::rpc::RpcConfig;
use serde::{Deserialize, Serialize};
use solana_commitment_config::CommitmentConfig;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

const ENV_RPC_URL: &str = "FRANCIUM_RPC_URL";
const ENV_COMMITMENT: &str = "FRANCIUM_COMMITMENT";
const ENV_REGISTRY: &str = "FRANCIUM_REGISTRY";
const ENV_PRICE_API: &str = "FRANCIUM_PRICE_API";
const ENV_TIMEOUT_SECS: &str = "FRANCIUM_TIMEOUT_SECS";

/// Connection and data-source settings for [`FranciumSdk::from_config`].
///
/// [`FranciumSdk::from_config`]: crate::FranciumSdk::from_config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    pub rpc_url: String,
    /// `processed`, `confirmed` or `finalized`.
    pub commitment: String,
    /// JSON pool registry. Required by `from_config`.
    pub registry_path: Option<PathBuf>,
    pub price_api_url: String,
    pub request_timeout_secs: u64,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: "confirmed".to_string(),
            registry_path: None,
            price_api_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl SdkConfig {
    /// Defaults overridden by `FRANCIUM_*` environment variables.
    ///
    /// # Errors
    /// Returns [`SdkError::Config`] if `FRANCIUM_TIMEOUT_SECS` is not an
    /// integer.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SdkError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_RPC_URL) {
            config.rpc_url = url;
        }
        if let Some(commitment) = lookup(ENV_COMMITMENT) {
            config.commitment = commitment;
        }
        if let Some(path) = lookup(ENV_REGISTRY) {
            config.registry_path = Some(PathBuf::from(path));
        }
        if let Some(url) = lookup(ENV_PRICE_API) {
            config.price_api_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout_secs = secs.trim().parse().map_err(|_| {
                SdkError::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number, got {secs}"))
            })?;
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// # Errors
    /// Returns [`SdkError::Config`] for an unknown commitment level.
    pub fn commitment_config(&self) -> Result<CommitmentConfig, SdkError> {
        match self.commitment.to_ascii_lowercase().as_str() {
            "processed" => Ok(CommitmentConfig::processed()),
            "confirmed" => Ok(CommitmentConfig::confirmed()),
            "finalized" => Ok(CommitmentConfig::finalized()),
            other => Err(SdkError::Config(format!("unknown commitment level {other}"))),
        }
    }

    /// # Errors
    /// Returns [`SdkError::Config`] for an unknown commitment level.
    pub fn rpc_config(&self) -> Result<RpcConfig, SdkError> {
        Ok(RpcConfig {
            url: self.rpc_url.clone(),
            commitment: self.commitment_config()?,
            timeout: self.timeout(),
        })
    }
}
