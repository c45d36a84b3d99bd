//! Swap fee tiers built on [`BasisPoints`].

use core::fmt;

use serde::{Deserialize, Serialize};

use super::basis_points::BPS_DENOMINATOR;
use super::BasisPoints;

/// The fraction of every swap input retained by the pool.
///
/// The fee never leaves the pool: it stays in the input reserve and grows
/// `k`, accruing to liquidity providers pro rata.
///
/// ```
/// use pairswap::domain::FeeTier;
///
/// let tier = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(tier.basis_points().get(), 30);
/// assert_eq!(tier.input_multiplier(), 9_970);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp), the constant-product standard.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    #[must_use]
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns `true` if the fee is strictly below 100%.
    #[must_use]
    pub const fn is_tradeable(&self) -> bool {
        self.0.get() < BPS_DENOMINATOR
    }

    /// Multiplier applied to swap inputs: `10_000 - fee_bps`.
    ///
    /// Saturates at zero for out-of-range tiers, which
    /// [`AmmConfig::validate`](crate::config::AmmConfig::validate) rejects.
    #[must_use]
    pub const fn input_multiplier(&self) -> u128 {
        match self.0.complement() {
            Some(c) => c.get() as u128,
            None => 0,
        }
    }

    /// Denominator paired with [`input_multiplier`](Self::input_multiplier).
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        BPS_DENOMINATOR as u128
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
