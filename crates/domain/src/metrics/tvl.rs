use super::{FarmPoolTvl, LendingPoolTvl, checked};
use crate::entities::pool::{FarmPoolSnapshot, LendingPoolSnapshot};
use crate::error::DomainError;
use crate::math::{Utilization, apr_by_utilization, apr_to_apy};
use crate::value_objects::price::PriceMap;
use rust_decimal::Decimal;

const PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// TVL, availability and rates of a lending pool.
///
/// Utilization is taken from token amounts, so the rates do not depend on
/// whether the pool's token has a price quote.
pub fn lending_pool_tvl(
    snapshot: &LendingPoolSnapshot,
    prices: &PriceMap,
) -> Result<LendingPoolTvl, DomainError> {
    let price = prices.price_or_zero(&snapshot.pool);
    let total = snapshot.total_amount().to_decimal()?;
    let available = snapshot.available_amount().to_decimal()?;

    let utilization = Utilization::from_liquidity(snapshot.available, snapshot.total());
    let apr = apr_by_utilization(utilization);

    Ok(LendingPoolTvl {
        id: snapshot.pool.clone(),
        apy: checked(apr_to_apy(apr).checked_mul(PERCENT), "apy")?,
        apr,
        utilization: utilization.value(),
        liquidity_locked: checked(total.checked_mul(price), "liquidity locked")?,
        available: checked(available.checked_mul(price), "available liquidity")?,
    })
}

/// TVL of a farm, valuing its LP tokens at `lp_prices[price_key]`.
pub fn farm_pool_tvl(
    snapshot: &FarmPoolSnapshot,
    lp_prices: &PriceMap,
) -> Result<FarmPoolTvl, DomainError> {
    let lp_amount = snapshot.total_lp_amount().to_decimal()?;
    let price = lp_prices.price_or_zero(&snapshot.price_key);

    Ok(FarmPoolTvl {
        id: snapshot.id.clone(),
        lp_amount,
        liquidity_locked: checked(lp_amount.checked_mul(price), "farm liquidity locked")?,
    })
}
