//! External data sources: token price quotes and registry files.

pub mod error;
pub mod providers;
pub mod registry;

pub use error::{PriceError, RegistryError};
pub use registry::load_registry;

use async_trait::async_trait;
use francium_domain::value_objects::PriceMap;

/// Source of unit prices keyed by token symbol.
///
/// Symbols without a quote are simply absent from the returned map.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    async fn token_prices(&self) -> Result<PriceMap, PriceError>;
}
