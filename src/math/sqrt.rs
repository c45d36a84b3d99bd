//! Integer square root.

use super::U256;

/// Returns `floor(sqrt(n))` using Newton's method.
///
/// Used to size the first deposit of a pool: the geometric mean of the two
/// amounts makes the initial share count independent of which asset is
/// listed first. The argument is a full 256-bit product; its root always
/// fits in a `u128`.
///
/// ```
/// use pairswap::math::{isqrt, widening_mul, U256};
///
/// assert_eq!(isqrt(widening_mul(1_000, 4_000)), 2_000);
/// assert_eq!(isqrt(U256::from(15u128)), 3);
/// ```
#[must_use]
pub fn isqrt(n: U256) -> u128 {
    if n <= U256::ONE {
        let (_, lo) = n.into_words();
        return lo;
    }
    // 2^ceil(bits / 2) is the smallest power of two not below the root.
    let bits = 256 - n.leading_zeros();
    let mut x = U256::ONE << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) >> 1u32;
        if y >= x {
            break;
        }
        x = y;
    }
    let (_, root) = x.into_words();
    root
}
