//! Rate math: the utilization curve and APR to APY compounding.

pub mod compounding;
pub mod interest_rate;

pub use compounding::{DAILY_COMPOUNDING, apr_to_apy, apr_to_apy_with_periods};
pub use interest_rate::{InterestRateCurve, Utilization, apr_by_utilization};
