//! Pure constant-product pricing.
//!
//! With `f` the fee in basis points and `m = 10_000 - f`:
//!
//! ```text
//! amount_out = floor(amount_in·m·reserve_out / (reserve_in·10_000 + amount_in·m))
//! amount_in  = floor(reserve_in·amount_out·10_000 / ((reserve_out − amount_out)·m)) + 1
//! quote      = floor(amount_a·reserve_b / reserve_a)
//! ```
//!
//! At 30 bp `m / 10_000 = 997 / 1_000`. Every division truncates toward
//! zero, so rounding always favours the pool.

use crate::domain::{Amount, FeeTier};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, narrow, widening_mul, Rounding, U256};

fn require_tradeable(fee_tier: FeeTier) -> Result<()> {
    if fee_tier.is_tradeable() {
        Ok(())
    } else {
        Err(AmmError::InvalidConfiguration("fee tier must be below 100%"))
    }
}

/// Output received for selling exactly `amount_in` into a pool.
///
/// ```
/// use pairswap::domain::{Amount, FeeTier};
/// use pairswap::engine::get_amount_out;
///
/// let out = get_amount_out(
///     Amount::new(100),
///     Amount::new(1_000),
///     Amount::new(4_000),
///     FeeTier::TIER_0_30_PERCENT,
/// );
/// assert_eq!(out, Ok(Amount::new(362)));
/// ```
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`, or an
///   intermediate exceeds 256 bits.
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_tier: FeeTier,
) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(AmmError::ZeroAmount("amount_in"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    require_tradeable(fee_tier)?;

    let in_with_fee = widening_mul(amount_in.get(), fee_tier.input_multiplier());
    let numerator = in_with_fee
        .checked_mul(U256::from(reserve_out.get()))
        .ok_or(AmmError::Overflow("amount_out numerator overflow"))?;
    // both terms are below 2^142
    let denominator = widening_mul(reserve_in.get(), fee_tier.denominator()) + in_with_fee;

    narrow(numerator / denominator)
        .map(Amount::new)
        .ok_or(AmmError::Overflow("amount_out overflow"))
}

/// Input required to buy exactly `amount_out` from a pool.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount_out` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or
///   `amount_out` would drain the output reserve.
/// - [`AmmError::Overflow`] if the result exceeds `u128`, or an
///   intermediate exceeds 256 bits.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee_tier: FeeTier,
) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(AmmError::ZeroAmount("amount_out"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() || amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    require_tradeable(fee_tier)?;

    let numerator = widening_mul(reserve_in.get(), amount_out.get())
        .checked_mul(U256::from(fee_tier.denominator()))
        .ok_or(AmmError::Overflow("amount_in numerator overflow"))?;
    let remaining = reserve_out.get() - amount_out.get();
    let denominator = widening_mul(remaining, fee_tier.input_multiplier());

    narrow(numerator / denominator)
        .and_then(|floor| floor.checked_add(1))
        .map(Amount::new)
        .ok_or(AmmError::Overflow("amount_in overflow"))
}

/// Amount of asset B worth `amount_a` at the ratio `reserve_b / reserve_a`.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount_a` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(AmmError::ZeroAmount("amount"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(amount_a.get(), reserve_b.get(), reserve_a.get(), Rounding::Down).map(Amount::new)
}
