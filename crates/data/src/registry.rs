//! Loading pool registries from JSON files.

use crate::error::RegistryError;
use francium_domain::registry::PoolRegistry;
use std::path::Path;
use tracing::info;

/// Reads and validates a registry file.
///
/// # Errors
/// Returns [`RegistryError`] if the file is unreadable, malformed, or has
/// duplicate pool ids.
pub fn load_registry(path: &Path) -> Result<PoolRegistry, RegistryError> {
    let raw = std::fs::read_to_string(path)?;
    let registry: PoolRegistry = serde_json::from_str(&raw)?;
    registry.validate()?;
    info!(
        path = %path.display(),
        lending_pools = registry.lending_pools.len(),
        farm_pools = registry.farm_pools.len(),
        "Loaded pool registry"
    );
    Ok(registry)
}
