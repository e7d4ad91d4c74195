use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by domain value objects and the pool registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The integer part of an amount does not fit the decimal range.
    #[error("amount {raw} with {decimals} decimals exceeds the decimal range")]
    AmountOverflow { raw: String, decimals: u8 },

    /// A derived value (product, sum or ratio) exceeds the decimal range.
    #[error("{0} exceeds the decimal range")]
    ValueOverflow(&'static str),

    /// A utilization ratio was constructed outside `[0, 1]`.
    #[error("utilization {0} is outside [0, 1]")]
    UtilizationOutOfRange(Decimal),

    /// No pool with the given id exists in the registry.
    #[error("unknown pool: {0}")]
    UnknownPool(String),

    /// The registry content is inconsistent.
    #[error("invalid registry: {0}")]
    InvalidRegistry(String),
}
