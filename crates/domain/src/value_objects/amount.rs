use crate::error::DomainError;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Width of the `Decimal` mantissa in bits.
const MANTISSA_BITS: usize = 96;

/// A raw on-chain token quantity together with its decimals exponent.
///
/// The semantic value is `raw / 10^decimals`. The raw part is kept as a
/// `U256` because supplies and wad-scaled balances routinely exceed `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount {
    pub raw: U256,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: impl Into<U256>, decimals: u8) -> Self {
        Self {
            raw: raw.into(),
            decimals,
        }
    }

    pub fn zero(decimals: u8) -> Self {
        Self {
            raw: U256::zero(),
            decimals,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Converts to a decimal value without truncating the raw integer first.
    ///
    /// # Errors
    /// Returns [`DomainError::AmountOverflow`] if the integer part is larger
    /// than the decimal range.
    pub fn to_decimal(&self) -> Result<Decimal, DomainError> {
        to_decimal(self.raw, self.decimals)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Ok(value) => write!(f, "{value}"),
            Err(_) => write!(f, "{}e-{}", self.raw, self.decimals),
        }
    }
}

/// Computes `raw / 10^decimals` as a `Decimal`.
///
/// Raw amounts that fit the 96-bit mantissa convert exactly. Wider amounts
/// are split into an integer part and a fractional remainder, so precision
/// is only lost where the 28 significant digits of `Decimal` run out.
///
/// # Errors
/// Returns [`DomainError::AmountOverflow`] if the integer part does not fit.
pub fn to_decimal(raw: U256, decimals: u8) -> Result<Decimal, DomainError> {
    let overflow = || DomainError::AmountOverflow {
        raw: raw.to_string(),
        decimals,
    };

    let mut mantissa = raw;
    let mut scale = u32::from(decimals);
    // Digits past the 28th fractional place cannot be represented.
    if scale > MAX_SCALE {
        mantissa /= U256::exp10((scale - MAX_SCALE) as usize);
        scale = MAX_SCALE;
    }

    if mantissa.bits() <= MANTISSA_BITS {
        return Ok(Decimal::from_i128_with_scale(
            mantissa.low_u128() as i128,
            scale,
        ));
    }

    let (whole, remainder) = mantissa.div_mod(U256::exp10(scale as usize));
    if whole.bits() > MANTISSA_BITS {
        return Err(overflow());
    }
    // remainder < 10^28 < 2^96
    let whole = Decimal::from_i128_with_scale(whole.low_u128() as i128, 0);
    let fraction = Decimal::from_i128_with_scale(remainder.low_u128() as i128, scale);
    whole.checked_add(fraction).ok_or_else(overflow)
}
