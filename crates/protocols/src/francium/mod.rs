//! Francium on-chain account layouts.
//!
//! This module decodes the accounts the SDK reads:
//! - Lending pools
//! - Lending reward stakes
//! - Leveraged farm strategies and user positions
//!
//! Layouts are read as borsh prefixes; trailing padding is ignored.

/// Farm strategy and user farm accounts.
pub mod farm;
/// Lending pool accounts.
pub mod lending_pool;
/// Lending reward stake accounts.
pub mod reward;

use crate::error::ChainError;
use borsh::BorshDeserialize;

/// Decodes the leading bytes of `data` as `T`.
pub(crate) fn decode_prefix<T: BorshDeserialize>(
    account: &'static str,
    data: &[u8],
) -> Result<T, ChainError> {
    T::deserialize(&mut &data[..]).map_err(|e| ChainError::Decode {
        account,
        reason: e.to_string(),
    })
}
