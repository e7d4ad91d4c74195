//! Tokens the SDK can price and value.

use crate::entities::token::Token;

/// Mint of wrapped SOL, also used for native SOL.
pub const NATIVE_MINT: &str = "So11111111111111111111111111111111111111112";

pub const TOKENS: &[Token] = &[
    Token::new("SOL", "Solana", NATIVE_MINT, 9).with_coingecko_id("solana"),
    Token::new("WSOL", "Wrapped Solana", NATIVE_MINT, 9).with_coingecko_id("solana"),
    Token::new("BTC", "Wrapped Bitcoin", "9n4nbM75f5Ui33ZbPYXn59EwSgE8CGsHtAeTH5YFeJ9E", 6)
        .with_coingecko_id("bitcoin"),
    Token::new("ETH", "Wrapped Ethereum", "2FPyTwcZLUg1MDrwsyoP4D6s1tM7hAkHYRjkNb5w6Pxk", 6)
        .with_coingecko_id("ethereum"),
    Token::new("USDT", "USDT", "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", 6)
        .with_coingecko_id("tether"),
    Token::new("WUSDT", "Wrapped USDT", "BQcdHdAQW1hczDbBi9hiegXAR7A98Q9jx3X3iBBBDiq4", 6)
        .with_coingecko_id("tether"),
    Token::new("USDC", "USDC", "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", 6)
        .with_coingecko_id("usd-coin"),
    Token::new("WUSDC", "Wrapped USDC", "BXXkv6z8ykpG1yuvUDPgh732wzVHB69RnB9YgSYh3itW", 6)
        .with_coingecko_id("usd-coin"),
    Token::new("YFI", "Wrapped YFI", "3JSf5tPeuscJGtaCp5giEiDhv51gQ4v3zWg8DGgyLfAB", 6)
        .with_coingecko_id("yearn-finance"),
    Token::new("LINK", "Wrapped Chainlink", "CWE8jPTUYhdCTZYWPTe1o5DFqfdjzWKc9WKz6rSjQUdG", 6)
        .with_coingecko_id("chainlink"),
    Token::new("ALEPH", "Wrapped ALEPH", "CsZ5LZkDS7h9TDKjrbL7VAwQZ9nsRu8vJLhRYfmGaN8K", 6),
    Token::new("SXP", "Wrapped SXP", "SF3oTvfWzEP3DTwGSvUXRrGTvr75pdZNnBLAH9bzMuX", 6)
        .with_coingecko_id("swipe"),
    Token::new("HGET", "Wrapped HGET", "BtZQfWqDGbk9Wf2rXEiWyQBdBY1etnUUn6zEphvVS7yN", 6),
    Token::new("CREAM", "Wrapped CREAM", "5Fu5UUgbjpUvdBveb3a1JTNirL8rXtiYeSMWvKjtUNQv", 6),
    Token::new("UBXT", "Wrapped UBXT", "873KLxCbz7s9Kc4ZzgYRtNmhfkQrhfyWGZJBmyCbC3ei", 6),
    Token::new("HNT", "Wrapped HNT", "HqB7uswoVg4suaQiDP3wjxob1G5WdZ144zhdStwMCq7e", 6)
        .with_coingecko_id("helium"),
    Token::new("FRONT", "Wrapped FRONT", "9S4t2NEAiJVMvPdRYKVrfJpBafPBLtvbvyS3DecojQHw", 6),
    Token::new("AKRO", "Wrapped AKRO", "6WNVCuxCGJzNjmMZoKyhZJwvJ5tYpsLyAtagzYASqBoF", 6),
    Token::new("HXRO", "Wrapped HXRO", "DJafV9qemGp7mLMEn5wrfqaFwxsbLgUsGVS16zKRk9kc", 6),
    Token::new("UNI", "Wrapped UNI", "DEhAasscXF4kEGxFgJ3bq4PpVGp5wyUxMRvn6TzGVHaw", 6)
        .with_coingecko_id("uniswap"),
    Token::new("SRM", "Serum", "SRMuApVNdxXokk5GT7XD5cUUgXMBCoAz2LHeuAoKWRt", 6)
        .with_coingecko_id("serum"),
    Token::new("FTT", "Wrapped FTT", "AGFEad2et2ZJif9jaGpdMixQqvW5i81aBdvKe7PHNfz3", 6)
        .with_coingecko_id("ftx-token"),
    Token::new("TOMO", "Wrapped TOMO", "GXMvfY2jpQctDqZ9RoU3oWPhufKiCcFEfchvYumtX7jd", 6),
    Token::new("KARMA", "Wrapped KARMA", "EcqExpGNFBve2i1cMJUTR4bPXj4ZoqmDD2rTkeCcaTFX", 4),
    Token::new("LUA", "Wrapped LUA", "EqWCKXfs3x47uVosDpTRgFniThL9Y8iCztJaapxbEaVX", 6),
    Token::new("MATH", "Wrapped MATH", "GeDS162t9yGJuLEHPWXXGrb1zwkzinCgRwnT8vHYjKza", 6),
    Token::new("KEEP", "Wrapped KEEP", "GUohe4DJUA5FKPWo3joiPgsB7yzer7LpDmt1Vhzy3Zht", 6),
    Token::new("SWAG", "Wrapped SWAG", "9F9fNTT6qwjsu4X4yWYKZpsbw5qT7o6yR2i57JF2jagy", 6),
    Token::new("FIDA", "Bonfida", "EchesyfXePKdLtoiZSL8pBe8Myagyy8ZRqsACNCFGnvp", 6)
        .with_coingecko_id("bonfida"),
    Token::new("KIN", "KIN", "kinXdEcpDQeHPEuQnqmUgtYykqKGVFq6CeVX5iAHJq6", 5)
        .with_coingecko_id("kin"),
    Token::new("MAPS", "MAPS", "MAPS41MDahZ9QdKXhVa4dWB9RuyfV4XqhyAZ8XcYepb", 6)
        .with_coingecko_id("maps"),
    Token::new("OXY", "OXY", "z3dn17yLaGMKffVogeFHQ9zWVcXgqgf3PQnDsNs2g6M", 6)
        .with_coingecko_id("oxygen"),
    Token::new("RAY", "Raydium", "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R", 6)
        .with_coingecko_id("raydium"),
    Token::new("COPE", "COPE", "3K6rftdAaQYMPunrtNRHgnK2UAtjm2JwyT2oCiTDouYE", 6)
        .with_coingecko_id("cope"),
    Token::new("STEP", "STEP", "StepAscQoEioFxxWGnh2sLBDFp9d8rvKz2Yp39iDpyT", 9)
        .with_coingecko_id("step-finance"),
    Token::new("MEDIA", "MEDIA", "ETAtLmCmsoiEEKfNrHKJ2kYy3MoABhU6NQvpSfij5tDs", 6)
        .with_coingecko_id("media-network"),
    Token::new("ROPE", "ROPE", "8PMHT4swUMtBzgHnh5U564N5sjPSiUz2cjEQzFnnP1Fo", 9)
        .with_coingecko_id("rope-token"),
    Token::new("MER", "Mercurial", "MERt85fc5boKw3BW1eYdxonEuJNvXbiMbs6hvheau5K", 6)
        .with_coingecko_id("mercurial"),
    Token::unminted("LIKE", "LIKE", 9),
    Token::new("ATLAS", "ATLAS", "ATLASXmbPQxBUYbxPsV97usA3fPQYEqzQBUHgiFCUsXx", 8)
        .with_coingecko_id("star-atlas"),
    Token::new("POLIS", "POLIS", "poLisWXnNRwC6oBu1vHiuKQzFjGL4XDSu4g9qjz9qVk", 8)
        .with_coingecko_id("star-atlas-dao"),
    Token::new("ORCA", "Orca", "orcaEKTdK7LKz57vaAYr9QeNsVEPfiu6QeMU1kektZE", 6)
        .with_coingecko_id("orca"),
    Token::new("mSOL", "Marinade.finance", "mSoLzYCxHdYgdzU16g5QSh3i5K3z3KZK7ytfqcJm7So", 9)
        .with_coingecko_id("msol"),
    Token::new("MNDE", "Marinade.finance", "MNDEFzGvMt87ueuHvVU9VcTqsAP5b3fTGPsHuuPA5ey", 9)
        .with_coingecko_id("marinade"),
];

pub fn find_token(symbol: &str) -> Option<&'static Token> {
    TOKENS.iter().find(|token| token.symbol == symbol)
}

/// First token minted at `mint`. SOL wins over WSOL for the native mint.
pub fn find_token_by_mint(mint: &str) -> Option<&'static Token> {
    TOKENS.iter().find(|token| token.mint_address == Some(mint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_are_unique() {
        let symbols: HashSet<_> = TOKENS.iter().map(|t| t.symbol).collect();
        assert_eq!(symbols.len(), TOKENS.len());
    }

    #[test]
    fn test_lookup_by_symbol_and_mint() {
        let karma = find_token("KARMA").unwrap();
        assert_eq!(karma.decimals, 4);

        let sol = find_token_by_mint(NATIVE_MINT).unwrap();
        assert_eq!(sol.symbol, "SOL");
        assert!(find_token("DOGE").is_none());
    }

    #[test]
    fn test_like_has_no_mint() {
        let like = find_token("LIKE").unwrap();
        assert_eq!(like.mint_address, None);
        assert_eq!(like.decimals, 9);
    }
}
