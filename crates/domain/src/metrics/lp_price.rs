use super::checked;
use crate::entities::pool::AmmReserves;
use crate::error::DomainError;
use crate::value_objects::price::PriceMap;
use rust_decimal::Decimal;

/// Price of one LP token: reserve value over LP supply.
///
/// Returns `None` when no LP tokens are outstanding. A reserve token
/// without a quote contributes zero value.
pub fn lp_price(reserves: &AmmReserves, prices: &PriceMap) -> Result<Option<Decimal>, DomainError> {
    let supply = reserves.lp_supply.to_decimal()?;
    if supply.is_zero() {
        return Ok(None);
    }
    let value_a = checked(
        reserves.reserve_a.to_decimal()?.checked_mul(prices.price_or_zero(&reserves.token_a)),
        "reserve value",
    )?;
    let value_b = checked(
        reserves.reserve_b.to_decimal()?.checked_mul(prices.price_or_zero(&reserves.token_b)),
        "reserve value",
    )?;
    let value = checked(value_a.checked_add(value_b), "reserve value")?;
    Ok(Some(checked(value.checked_div(supply), "lp price")?))
}
