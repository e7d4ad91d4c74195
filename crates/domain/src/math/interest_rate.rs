use crate::error::DomainError;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed-point scale used when dividing raw liquidity amounts.
const RATIO_SCALE: u32 = 18;

/// Fraction of a lending pool's deposits currently borrowed, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Utilization(Decimal);

impl Utilization {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const FULL: Self = Self(Decimal::ONE);

    /// # Errors
    /// Returns [`DomainError::UtilizationOutOfRange`] outside `[0, 1]`.
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value < Decimal::ZERO || value > Decimal::ONE {
            return Err(DomainError::UtilizationOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Utilization of a pool holding `available` out of `total` deposits.
    ///
    /// A pool with no deposits, or with malformed state where more is
    /// available than deposited, is treated as unused.
    pub fn from_liquidity(available: U256, total: U256) -> Self {
        if total.is_zero() || available >= total {
            return Self::ZERO;
        }
        let borrowed = total - available;
        let one = U256::exp10(RATIO_SCALE as usize);
        let scaled = match borrowed.checked_mul(one) {
            Some(numerator) => numerator / total,
            // total > 10^59 here, so dividing it down keeps 18 digits.
            None => borrowed / (total / one),
        };
        Self(Decimal::from_i128_with_scale(
            scaled.low_u128() as i128,
            RATIO_SCALE,
        ))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

/// Three-segment piecewise-linear borrow curve.
///
/// Each segment starts at the rate the previous one ends on, so the curve is
/// continuous at both kinks whatever the slopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRateCurve {
    pub first_kink: Decimal,
    pub second_kink: Decimal,
    pub first_slope: Decimal,
    pub second_slope: Decimal,
    pub third_slope: Decimal,
}

impl InterestRateCurve {
    /// Kinks at 60% and 90%; slopes 0.25, 0.25 and 13.
    pub const FRANCIUM: Self = Self {
        first_kink: Decimal::from_parts(6, 0, 0, false, 1),
        second_kink: Decimal::from_parts(9, 0, 0, false, 1),
        first_slope: Decimal::from_parts(25, 0, 0, false, 2),
        second_slope: Decimal::from_parts(25, 0, 0, false, 2),
        third_slope: Decimal::from_parts(13, 0, 0, false, 0),
    };

    /// Annual percentage rate at the given utilization.
    pub fn apr(&self, utilization: Utilization) -> Decimal {
        let u = utilization.value();
        if u <= self.first_kink {
            self.first_slope * u
        } else if u < self.second_kink {
            self.rate_at_first_kink() + self.second_slope * (u - self.first_kink)
        } else {
            self.rate_at_second_kink() + self.third_slope * (u - self.second_kink)
        }
    }

    fn rate_at_first_kink(&self) -> Decimal {
        self.first_slope * self.first_kink
    }

    fn rate_at_second_kink(&self) -> Decimal {
        self.rate_at_first_kink() + self.second_slope * (self.second_kink - self.first_kink)
    }
}

impl Default for InterestRateCurve {
    fn default() -> Self {
        Self::FRANCIUM
    }
}

/// APR of a Francium lending pool at the given utilization.
pub fn apr_by_utilization(utilization: Utilization) -> Decimal {
    InterestRateCurve::FRANCIUM.apr(utilization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn apr(u: Decimal) -> Decimal {
        apr_by_utilization(Utilization::new(u).unwrap())
    }

    #[test]
    fn test_curve_endpoints() {
        assert_eq!(apr(dec!(0)), Decimal::ZERO);
        assert_eq!(apr(dec!(1)), dec!(1.525));
    }

    #[test]
    fn test_curve_is_continuous_at_kinks() {
        assert_eq!(apr(dec!(0.6)), dec!(0.15));
        assert_eq!(apr(dec!(0.9)), dec!(0.225));

        // Just either side of each kink stays close to the kink rate.
        let eps = dec!(0.000001);
        assert!((apr(dec!(0.6) + eps) - dec!(0.15)).abs() < dec!(0.00001));
        assert!((apr(dec!(0.9) - eps) - dec!(0.225)).abs() < dec!(0.00001));
    }

    #[test]
    fn test_curve_segments() {
        // Segment 1: 0.25 * 0.4
        assert_eq!(apr(dec!(0.4)), dec!(0.1));
        // Segment 2: 0.15 + 0.25 * 0.15
        assert_eq!(apr(dec!(0.75)), dec!(0.1875));
        // Segment 3: 0.225 + 13 * 0.05
        assert_eq!(apr(dec!(0.95)), dec!(0.875));
    }

    #[test]
    fn test_out_of_range_utilization_is_rejected() {
        assert_eq!(
            Utilization::new(dec!(1.01)),
            Err(DomainError::UtilizationOutOfRange(dec!(1.01)))
        );
        assert!(Utilization::new(dec!(-0.1)).is_err());
    }

    #[test]
    fn test_utilization_from_liquidity() {
        let u = Utilization::from_liquidity(U256::from(400u64), U256::from(1000u64));
        assert_eq!(u.value(), dec!(0.6));

        let fully_borrowed = Utilization::from_liquidity(U256::zero(), U256::from(10u64));
        assert_eq!(fully_borrowed, Utilization::FULL);
    }

    #[test]
    fn test_utilization_of_empty_or_malformed_pool_is_zero() {
        assert_eq!(
            Utilization::from_liquidity(U256::zero(), U256::zero()),
            Utilization::ZERO
        );
        assert_eq!(
            Utilization::from_liquidity(U256::from(11u64), U256::from(10u64)),
            Utilization::ZERO
        );
    }

    #[test]
    fn test_utilization_of_huge_pool() {
        let total = U256::exp10(70);
        let available = total / U256::from(4u8);
        let u = Utilization::from_liquidity(available, total);
        assert_eq!(u.value(), dec!(0.75));
    }
}
