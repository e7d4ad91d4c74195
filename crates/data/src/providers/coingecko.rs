//! CoinGecko simple-price provider, the SDK's default price source.

use crate::PriceProvider;
use crate::error::PriceError;
use async_trait::async_trait;
use francium_domain::entities::Token;
use francium_domain::registry::TOKENS;
use francium_domain::value_objects::PriceMap;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Deserialize)]
struct UsdQuote {
    usd: Option<Decimal>,
}

/// Quotes every registry token that has a CoinGecko id, in USD.
pub struct CoinGeckoProvider {
    client: reqwest::Client,
    base_url: String,
    tokens: &'static [Token],
}

impl CoinGeckoProvider {
    /// # Errors
    /// Returns [`PriceError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, PriceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            tokens: TOKENS,
        })
    }

    /// Distinct CoinGecko ids, sorted.
    fn coin_ids(&self) -> Vec<&'static str> {
        self.tokens
            .iter()
            .filter_map(|token| token.coingecko_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Maps CoinGecko quotes back onto token symbols.
fn prices_from_quotes(tokens: &[Token], quotes: &HashMap<String, UsdQuote>) -> PriceMap {
    let mut prices = PriceMap::new();
    for token in tokens {
        let Some(id) = token.coingecko_id else {
            continue;
        };
        match quotes.get(id).and_then(|quote| quote.usd) {
            Some(price) => prices.insert(token.symbol, price),
            None => warn!(symbol = token.symbol, coin = id, "No USD quote returned"),
        }
    }
    prices
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    async fn token_prices(&self) -> Result<PriceMap, PriceError> {
        let ids = self.coin_ids().join(",");
        let url = format!("{}/simple/price", self.base_url);
        debug!(url = %url, "Requesting token prices");

        let quotes: HashMap<String, UsdQuote> = self
            .client
            .get(&url)
            .query(&[("ids", ids.as_str()), ("vs_currencies", "usd")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let prices = prices_from_quotes(self.tokens, &quotes);
        debug!(quoted = prices.len(), "Received token prices");
        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quotes_fan_out_to_every_symbol_sharing_an_id() {
        let quotes: HashMap<String, UsdQuote> = serde_json::from_str(
            r#"{"solana": {"usd": 151.2}, "usd-coin": {"usd": 1.0}, "raydium": {}}"#,
        )
        .unwrap();

        let prices = prices_from_quotes(TOKENS, &quotes);
        assert_eq!(prices.get("SOL"), Some(dec!(151.2)));
        assert_eq!(prices.get("WSOL"), Some(dec!(151.2)));
        assert_eq!(prices.get("USDC"), Some(dec!(1)));
        assert_eq!(prices.get("WUSDC"), Some(dec!(1)));
        assert_eq!(prices.get("RAY"), None);
        // No CoinGecko id at all.
        assert_eq!(prices.get("LIKE"), None);
    }

    #[test]
    fn test_coin_ids_are_deduplicated() {
        let provider = CoinGeckoProvider::new(DEFAULT_BASE_URL, Duration::from_secs(5)).unwrap();
        let ids = provider.coin_ids();

        assert_eq!(ids.iter().filter(|id| **id == "solana").count(), 1);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let provider =
            CoinGeckoProvider::new("http://localhost:8080/", Duration::from_secs(5)).unwrap();
        assert_eq!(provider.base_url, "http://localhost:8080");
    }
}
