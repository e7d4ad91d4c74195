//! Byte-level helpers for SPL token accounts and address parsing.

use crate::error::ChainError;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// SPL token program id.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Associated token account program id.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";

// Token account layout: mint (32) | owner (32) | amount (u64 LE) | ...
const TOKEN_ACCOUNT_AMOUNT_OFFSET: usize = 64;
const TOKEN_ACCOUNT_MIN_LEN: usize = 165;

/// Parses a base58 address.
///
/// # Errors
/// Returns [`ChainError::InvalidAddress`] if `address` is not a valid key.
pub fn parse_pubkey(address: &str) -> Result<Pubkey, ChainError> {
    Pubkey::from_str(address).map_err(|e| ChainError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Reads the `amount` field of a packed SPL token account.
///
/// # Errors
/// Returns [`ChainError::Decode`] if `data` is shorter than a token account.
pub fn token_account_amount(data: &[u8]) -> Result<u64, ChainError> {
    if data.len() < TOKEN_ACCOUNT_MIN_LEN {
        return Err(ChainError::Decode {
            account: "token",
            reason: format!("expected {TOKEN_ACCOUNT_MIN_LEN} bytes, got {}", data.len()),
        });
    }
    let mut amount = [0u8; 8];
    amount.copy_from_slice(&data[TOKEN_ACCOUNT_AMOUNT_OFFSET..TOKEN_ACCOUNT_AMOUNT_OFFSET + 8]);
    Ok(u64::from_le_bytes(amount))
}

/// Associated token account of `owner` for `mint`.
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Result<Pubkey, ChainError> {
    let token_program = parse_pubkey(TOKEN_PROGRAM_ID)?;
    let ata_program = parse_pubkey(ASSOCIATED_TOKEN_PROGRAM_ID)?;
    let (address, _bump) = Pubkey::find_program_address(
        &[owner.as_ref(), token_program.as_ref(), mint.as_ref()],
        &ata_program,
    );
    Ok(address)
}
