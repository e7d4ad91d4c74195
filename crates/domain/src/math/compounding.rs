use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use std::num::NonZeroU32;

/// Compounding periods per year used for displayed APYs.
pub const DAILY_COMPOUNDING: NonZeroU32 = match NonZeroU32::new(365) {
    Some(periods) => periods,
    None => panic!("365 is non-zero"),
};

/// Converts a simple annual rate to the yield of compounding it daily.
pub fn apr_to_apy(apr: Decimal) -> Decimal {
    apr_to_apy_with_periods(apr, DAILY_COMPOUNDING)
}

/// `(1 + apr / n)^n - 1`.
///
/// Saturates at `Decimal::MAX` if the power leaves the decimal range.
pub fn apr_to_apy_with_periods(apr: Decimal, periods: NonZeroU32) -> Decimal {
    let n = periods.get();
    let growth = Decimal::ONE + apr / Decimal::from(n);
    match growth.checked_powu(u64::from(n)) {
        Some(compounded) => compounded - Decimal::ONE,
        None => Decimal::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_apr_has_zero_apy() {
        assert_eq!(apr_to_apy(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_daily_compounding_of_ten_percent() {
        let apy = apr_to_apy(dec!(0.1));
        // (1 + 0.1/365)^365 - 1 = 0.1051557816...
        assert!((apy - dec!(0.1051557816)).abs() < dec!(0.000000001));
        assert!((apy - dec!(0.10516)).abs() < dec!(0.00001));
    }

    #[test]
    fn test_single_period_is_simple_rate() {
        let once = NonZeroU32::new(1).unwrap();
        assert_eq!(apr_to_apy_with_periods(dec!(0.2), once), dec!(0.2));
    }

    #[test]
    fn test_monthly_compounding() {
        let monthly = NonZeroU32::new(12).unwrap();
        let apy = apr_to_apy_with_periods(dec!(0.12), monthly);
        // 1.01^12 - 1
        assert!((apy - dec!(0.1268250301)).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_top_of_curve_compounds_above_apr() {
        let apy = apr_to_apy(dec!(1.525));
        assert!(apy > dec!(1.525));
        assert!(apy < dec!(3.6));
    }
}
