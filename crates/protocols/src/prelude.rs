//! Prelude module for convenient imports.
//!
//! ```rust
//! use francium_protocols::prelude::*;
//! ```

pub use crate::ChainReader;
pub use crate::error::ChainError;
pub use crate::reader::SolanaChainReader;
pub use crate::rpc::{RpcConfig, RpcProvider};
pub use solana_sdk::pubkey::Pubkey;
