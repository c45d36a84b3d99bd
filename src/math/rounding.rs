//! Integer division with an explicit rounding direction.
//!
//! [`div_round`] is the low-level building block behind
//! [`Amount::checked_div`](crate::domain::Amount::checked_div) and the
//! share computations of the liquidity engine.
//!
//! # Convention
//!
//! Every quantity that leaves the pool rounds **down**:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Withdrawn reserves | [`Rounding::Down`] |
//! | Minted shares | [`Rounding::Down`] |
//! | Optimal deposit amount | [`Rounding::Down`] |
//!
//! [`Rounding::Up`] is available for callers that need the mirror image.
//!
//! ```
//! use pairswap::math::{div_round, Rounding};
//!
//! assert_eq!(div_round(398_800_000, 1_099_700, Rounding::Down), Some(362));
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(div_round(10, 0, Rounding::Down), None);
//! ```

/// Rounding direction for integer division.
///
/// Division in this crate always takes an explicit `Rounding` so that no
/// call site truncates by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

/// Divides `numerator` by `denominator` with the given rounding.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let quotient = numerator / denominator;
    match rounding {
        Rounding::Down => Some(quotient),
        Rounding::Up => {
            // quotient < u128::MAX whenever a remainder exists, so the
            // increment cannot overflow.
            if numerator % denominator != 0 {
                Some(quotient + 1)
            } else {
                Some(quotient)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(100, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::Up), None);
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(4_000_000, 1_000, Rounding::Down), Some(4_000));
        assert_eq!(div_round(4_000_000, 1_000, Rounding::Up), Some(4_000));
    }

    #[test]
    fn remainder_splits_directions() {
        assert_eq!(div_round(9, 10, Rounding::Down), Some(0));
        assert_eq!(div_round(9, 10, Rounding::Up), Some(1));
    }

    #[test]
    fn max_values() {
        assert_eq!(div_round(u128::MAX, 1, Rounding::Up), Some(u128::MAX));
        assert_eq!(div_round(u128::MAX, u128::MAX / 2, Rounding::Down), Some(2));
        assert_eq!(div_round(u128::MAX, u128::MAX / 2, Rounding::Up), Some(3));
    }

    #[test]
    fn swap_output_example() {
        // 100 in against (1000, 4000) at 30 bp.
        assert_eq!(
            div_round(100 * 997 * 4_000, 1_000 * 1_000 + 100 * 997, Rounding::Down),
            Some(362)
        );
    }
}
