//! 256-bit intermediates.
//!
//! Reserves are `u128`, so the invariant `k`, the share geometric mean and
//! the pricing numerators are computed as [`U256`] and narrowed back once
//! the division has brought them into range.

pub use ethnum::U256;

/// Full product `a * b`.
///
/// Never overflows: `(2^128 - 1)^2 < 2^256`.
///
/// ```
/// use pairswap::math::widening_mul;
///
/// let k = widening_mul(u128::MAX, 2);
/// assert_eq!(k.into_words(), (1, u128::MAX - 1));
/// assert!(widening_mul(1_100, 3_638) > widening_mul(1_000, 4_000));
/// ```
#[must_use]
pub fn widening_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Returns `value` as a `u128`, or `None` if its high word is set.
#[must_use]
pub fn narrow(value: U256) -> Option<u128> {
    let (hi, lo) = value.into_words();
    if hi == 0 {
        Some(lo)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_products_stay_in_low_word() {
        assert_eq!(narrow(widening_mul(1_000, 4_000)), Some(4_000_000));
    }

    #[test]
    fn reserve_sized_product_spills() {
        // 1_000 ETH against 1_000_000 units of an 18-decimal stablecoin
        let k = widening_mul(10u128.pow(21), 10u128.pow(24));
        assert_eq!(narrow(k), None);
        assert_eq!(k / U256::from(10u128.pow(24)), U256::from(10u128.pow(21)));
    }

    #[test]
    fn max_product() {
        let k = widening_mul(u128::MAX, u128::MAX);
        assert_eq!(k.into_words(), (u128::MAX - 1, 1));
        assert_eq!(k / U256::from(u128::MAX), U256::from(u128::MAX));
    }

    #[test]
    fn comparison_spans_words() {
        assert!(widening_mul(u128::MAX, 3) > widening_mul(u128::MAX, 2));
        assert!(widening_mul(1 << 127, 4) > widening_mul(u128::MAX, 1));
    }
}
