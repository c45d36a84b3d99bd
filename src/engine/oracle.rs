//! Read-only price and reserve queries.
//!
//! Spot prices come straight from the current reserves; they move with
//! every trade and carry no time weighting.

use tracing::debug;

use crate::domain::{Amount, AssetId, PairKey};
use crate::error::{AmmError, Result};
use crate::math::{mul_div, Rounding};
use crate::traits::{Clock, EventSink, TokenTransfer};

use super::Amm;

impl<T: TokenTransfer, C: Clock, E: EventSink> Amm<T, C, E> {
    /// Spot price of `asset_a` in units of `asset_b`, multiplied by
    /// [`AmmConfig::price_scale`](crate::config::AmmConfig::price_scale):
    /// `reserve_b · scale / reserve_a`, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientLiquidity`] if the pool does not exist or
    ///   `reserve_a` is zero.
    /// - [`AmmError::Overflow`] if the scaled price exceeds `u128`.
    pub fn get_price(&self, asset_a: AssetId, asset_b: AssetId) -> Result<u128> {
        let (reserve_a, reserve_b) = self.get_reserves(asset_a, asset_b)?;
        if reserve_a.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        let price = mul_div(
            reserve_b.get(),
            self.config.price_scale(),
            reserve_a.get(),
            Rounding::Down,
        )?;
        debug!(%asset_a, %asset_b, price, "spot price");
        Ok(price)
    }

    /// Reserves of the `{asset_a, asset_b}` pool ordered as the arguments.
    ///
    /// A pair without a pool reports `(0, 0)`; swapping the arguments
    /// transposes the result.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if both assets are the same.
    pub fn get_reserves(&self, asset_a: AssetId, asset_b: AssetId) -> Result<(Amount, Amount)> {
        let pair = PairKey::resolve(asset_a, asset_b)?;
        match self.registry.get(&pair.key()) {
            Some(pool) => pool.reserves_for(&asset_a),
            None => Ok((Amount::ZERO, Amount::ZERO)),
        }
    }
}
