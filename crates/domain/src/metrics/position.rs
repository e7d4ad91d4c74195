use super::{UserFarmPosition, UserLendingPosition, checked};
use crate::entities::pool::{AmmReserves, FarmPoolSnapshot, LendingPoolSnapshot};
use crate::entities::position::{UserFarmSnapshot, UserLendingSnapshot};
use crate::error::DomainError;
use crate::value_objects::amount::Amount;
use crate::value_objects::price::PriceMap;
use primitive_types::{U256, U512};
use rust_decimal::Decimal;

/// Underlying tokens redeemable per share, `None` while no shares exist.
pub fn share_price(snapshot: &LendingPoolSnapshot) -> Result<Option<Decimal>, DomainError> {
    let shares = snapshot.share_supply_amount().to_decimal()?;
    if shares.is_zero() {
        return Ok(None);
    }
    let total = snapshot.total_amount().to_decimal()?;
    Ok(Some(checked(total.checked_div(shares), "share price")?))
}

/// A user's staked plus wallet shares of one lending pool, in tokens and value.
pub fn user_lending_position(
    snapshot: &LendingPoolSnapshot,
    user: &UserLendingSnapshot,
    prices: &PriceMap,
) -> Result<UserLendingPosition, DomainError> {
    let reward_position = Amount::new(user.reward_shares, snapshot.scale).to_decimal()?;
    let balance_position = Amount::new(user.balance_shares, snapshot.scale).to_decimal()?;
    let total_position = checked(reward_position.checked_add(balance_position), "share position")?;

    let share_price = share_price(snapshot)?;
    let total_amount = match share_price {
        Some(price) => checked(price.checked_mul(total_position), "lending amount")?,
        None => Decimal::ZERO,
    };
    let value = checked(
        total_amount.checked_mul(prices.price_or_zero(&snapshot.pool)),
        "lending value",
    )?;

    Ok(UserLendingPosition {
        pool: snapshot.pool.clone(),
        scale: snapshot.scale,
        reward_position,
        balance_position,
        total_position,
        share_price,
        total_amount,
        value,
    })
}

/// A user's leveraged farm position: LP value, debt, equity and leverage.
///
/// `lp_prices` is keyed by LP price key, `prices` by token symbol.
pub fn user_farm_position(
    farm: &FarmPoolSnapshot,
    reserves: &AmmReserves,
    user: &UserFarmSnapshot,
    lp_prices: &PriceMap,
    prices: &PriceMap,
) -> Result<UserFarmPosition, DomainError> {
    let user_lp = user_lp_units(user.lp_shares, farm.total_lp, farm.total_shares);
    let lp_amount = Amount::new(user_lp, farm.lp_decimals).to_decimal()?;
    let position_value = checked(
        lp_amount.checked_mul(lp_prices.price_or_zero(&farm.price_key)),
        "farm position value",
    )?;

    let debt_a = Amount::new(user.borrowed_a, reserves.reserve_a.decimals).to_decimal()?;
    let debt_b = Amount::new(user.borrowed_b, reserves.reserve_b.decimals).to_decimal()?;
    let debt_a = checked(debt_a.checked_mul(prices.price_or_zero(&reserves.token_a)), "debt value")?;
    let debt_b = checked(debt_b.checked_mul(prices.price_or_zero(&reserves.token_b)), "debt value")?;
    let debt_value = checked(debt_a.checked_add(debt_b), "debt value")?;

    let equity_value = checked(position_value.checked_sub(debt_value), "equity value")?;
    let leverage = if equity_value > Decimal::ZERO {
        Some(checked(position_value.checked_div(equity_value), "leverage")?)
    } else {
        None
    };

    Ok(UserFarmPosition {
        farm: farm.id.clone(),
        lp_amount,
        position_value,
        debt_value,
        equity_value,
        leverage,
    })
}

/// `shares * total_lp / total_shares` in 512-bit arithmetic, zero for a
/// farm without shares. Saturates when the quotient exceeds 256 bits.
fn user_lp_units(shares: U256, total_lp: U256, total_shares: U256) -> U256 {
    if total_shares.is_zero() {
        return U256::zero();
    }
    let units = shares.full_mul(total_lp) / U512::from(total_shares);
    U256::try_from(units).unwrap_or(U256::MAX)
}
