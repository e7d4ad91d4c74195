//! Price provider over a fixed set of quotes.

use crate::PriceProvider;
use crate::error::PriceError;
use async_trait::async_trait;
use francium_domain::value_objects::PriceMap;
use std::path::Path;

/// Serves the same quotes on every call. Useful offline and in tests.
#[derive(Debug, Clone, Default)]
pub struct FixedPriceProvider {
    prices: PriceMap,
}

impl FixedPriceProvider {
    pub fn new(prices: PriceMap) -> Self {
        Self { prices }
    }

    /// Loads quotes from a JSON object of `symbol: price`.
    ///
    /// # Errors
    /// Returns [`PriceError::Io`] or [`PriceError::Json`] if the file cannot
    /// be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, PriceError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::new(serde_json::from_str(&raw)?))
    }
}

#[async_trait]
impl PriceProvider for FixedPriceProvider {
    async fn token_prices(&self) -> Result<PriceMap, PriceError> {
        Ok(self.prices.clone())
    }
}
