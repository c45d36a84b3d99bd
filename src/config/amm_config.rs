//! Engine-wide configuration.
//!
//! [`AmmConfig`] holds the immutable parameters shared by every pool the
//! engine manages: the swap fee, the size of the permanent
//! minimum-liquidity lock, and the fixed-point scale of spot prices.
//!
//! # Loading
//!
//! Build one in code with [`AmmConfig::new`], take the defaults, or parse a
//! JSON document with [`AmmConfig::from_json_str`]. Absent fields fall
//! back to their defaults:
//!
//! ```
//! use pairswap::config::AmmConfig;
//! use pairswap::domain::{BasisPoints, FeeTier};
//!
//! let cfg = AmmConfig::from_json_str(r#"{ "fee_tier": 5 }"#).expect("valid");
//! assert_eq!(cfg.fee_tier(), FeeTier::new(BasisPoints::new(5)));
//! assert_eq!(cfg.minimum_liquidity().get(), 1_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{FeeTier, Shares};
use crate::error::AmmError;

/// Shares permanently locked to the burn account by each pool's first deposit.
pub const DEFAULT_MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

/// Fixed-point multiplier of spot prices (10^18).
pub const DEFAULT_PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Validated engine configuration.
///
/// # Validation
///
/// - The fee tier must be strictly below 100%; at 100% every swap output
///   is zero.
/// - `minimum_liquidity` must be non-zero, otherwise the share supply of
///   a pool could return to zero.
/// - `price_scale` must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmmConfig {
    fee_tier: FeeTier,
    minimum_liquidity: Shares,
    price_scale: u128,
}

impl AmmConfig {
    /// Creates and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any invariant fails.
    pub fn new(
        fee_tier: FeeTier,
        minimum_liquidity: Shares,
        price_scale: u128,
    ) -> Result<Self, AmmError> {
        let config = Self {
            fee_tier,
            minimum_liquidity,
            price_scale,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the document is
    /// malformed or the parsed values fail validation.
    pub fn from_json_str(json: &str) -> Result<Self, AmmError> {
        let config: Self = serde_json::from_str(json).map_err(|err| {
            tracing::warn!(error = %err, "rejected malformed AMM configuration");
            AmmError::InvalidConfiguration("malformed configuration document")
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] naming the first
    /// violated invariant.
    pub fn validate(&self) -> Result<(), AmmError> {
        if !self.fee_tier.is_tradeable() {
            return Err(AmmError::InvalidConfiguration(
                "fee tier must be below 100%",
            ));
        }
        if self.minimum_liquidity.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "minimum liquidity must be non-zero",
            ));
        }
        if self.price_scale == 0 {
            return Err(AmmError::InvalidConfiguration(
                "price scale must be non-zero",
            ));
        }
        Ok(())
    }

    /// Returns the swap fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the number of shares locked by each pool's first deposit.
    pub const fn minimum_liquidity(&self) -> Shares {
        self.minimum_liquidity
    }

    /// Returns the spot-price multiplier.
    #[must_use]
    pub const fn price_scale(&self) -> u128 {
        self.price_scale
    }
}

impl Default for AmmConfig {
    fn default() -> Self {
        Self {
            fee_tier: FeeTier::TIER_0_30_PERCENT,
            minimum_liquidity: DEFAULT_MINIMUM_LIQUIDITY,
            price_scale: DEFAULT_PRICE_SCALE,
        }
    }
}
