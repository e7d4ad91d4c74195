//! Domain model of the Francium SDK.
//!
//! - Token amounts and price maps ([`value_objects`])
//! - Pool descriptors and chain snapshots ([`entities`])
//! - The token and pool registry ([`registry`])
//! - Interest-rate curve and APY compounding ([`math`])
//! - TVL and position aggregation ([`metrics`])

pub mod entities;
pub mod enums;
pub mod error;
pub mod math;
pub mod metrics;
pub mod registry;
pub mod value_objects;

pub use error::DomainError;
