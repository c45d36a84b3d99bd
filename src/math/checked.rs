//! Checked arithmetic for the crate's quantity newtypes.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning methods of
//! [`Amount`] and [`Shares`] into [`Result`]s carrying a specific
//! [`AmmError`] variant, so engine code can chain them with `?`.
//!
//! ```
//! use pairswap::domain::Amount;
//! use pairswap::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000);
//! assert!(reserve.safe_add(&Amount::new(100)).is_ok());
//! assert!(reserve.safe_sub(&Amount::new(1_001)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::{AmmError, Result};

use super::{div_round, narrow, widening_mul, Rounding, U256};

/// Fallible arithmetic for quantity newtypes.
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: a clamped reserve would silently break the
///   accounting invariants, so errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the result is not representable.
    fn safe_mul(&self, other: &Self) -> Result<Self>;

    /// Checked division with explicit [`Rounding`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self> {
        self.checked_mul(other)
            .ok_or(AmmError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self> {
        self.checked_div(other, rounding)
            .ok_or(AmmError::DivisionByZero)
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(AmmError::Overflow("share addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(AmmError::Underflow("share subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self> {
        self.get()
            .checked_mul(other.get())
            .map(Shares::new)
            .ok_or(AmmError::Overflow("share multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self> {
        div_round(self.get(), other.get(), rounding)
            .map(Shares::new)
            .ok_or(AmmError::DivisionByZero)
    }
}

/// Computes `a * b / d` with the given rounding.
///
/// This is the proportional step shared by the pricing formulas: optimal
/// deposit amounts, share minting, withdrawals and the spot price. The
/// product is held at full 256-bit width, so only a quotient that does not
/// fit in `u128` overflows.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128> {
    if d == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = widening_mul(a, b);
    let divisor = U256::from(d);
    let quotient =
        narrow(product / divisor).ok_or(AmmError::Overflow("mul_div quotient overflow"))?;
    match rounding {
        Rounding::Up if product % divisor != U256::ZERO => quotient
            .checked_add(1)
            .ok_or(AmmError::Overflow("mul_div rounding overflow")),
        _ => Ok(quotient),
    }
}
