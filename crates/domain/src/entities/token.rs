use serde::Serialize;

/// A fungible token known to the SDK.
///
/// Tokens are compiled into the registry, hence the `'static` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub symbol: &'static str,
    pub name: &'static str,
    /// Mint address, base58. Absent for tokens not yet deployed.
    pub mint_address: Option<&'static str>,
    pub decimals: u8,
    pub coingecko_id: Option<&'static str>,
}

impl Token {
    pub const fn new(
        symbol: &'static str,
        name: &'static str,
        mint: &'static str,
        decimals: u8,
    ) -> Self {
        Self {
            symbol,
            name,
            mint_address: Some(mint),
            decimals,
            coingecko_id: None,
        }
    }

    /// A token without a known mint address.
    pub const fn unminted(symbol: &'static str, name: &'static str, decimals: u8) -> Self {
        Self {
            symbol,
            name,
            mint_address: None,
            decimals,
            coingecko_id: None,
        }
    }

    pub const fn with_coingecko_id(mut self, id: &'static str) -> Self {
        self.coingecko_id = Some(id);
        self
    }
}
