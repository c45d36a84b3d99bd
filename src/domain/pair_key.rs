//! Canonical, order-independent pair identifiers.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::AssetId;
use crate::error::AmmError;

/// Domain separator mixed into every pair digest.
pub const PAIR_KEY_DOMAIN: &[u8] = b"PAIRSWAP_PAIR_V1";

/// Digest identifying the pool of one unordered asset pair.
///
/// `PairKey = blake3(PAIR_KEY_DOMAIN || asset_x || asset_y)` where
/// `asset_x < asset_y`. Naming the same two assets in either order yields
/// the same key.
///
/// ```
/// use pairswap::domain::{AssetId, PairKey};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let ab = PairKey::resolve(a, b).expect("distinct assets");
/// let ba = PairKey::resolve(b, a).expect("distinct assets");
/// assert_eq!(ab.key(), ba.key());
/// assert_eq!(ab.asset_x(), a);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey(#[serde(with = "hex::serde")] [u8; 32]);

impl PairKey {
    /// Resolves two asset identifiers into their canonical pair.
    ///
    /// Pure: the same unordered input always yields the same key and the
    /// same `(asset_x, asset_y)` assignment.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if `asset_a == asset_b`.
    pub fn resolve(asset_a: AssetId, asset_b: AssetId) -> Result<ResolvedPair, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::IdenticalAssets);
        }
        let (asset_x, asset_y) = if asset_a < asset_b {
            (asset_a, asset_b)
        } else {
            (asset_b, asset_a)
        };
        Ok(ResolvedPair {
            key: Self::digest(&asset_x, &asset_y),
            asset_x,
            asset_y,
        })
    }

    fn digest(asset_x: &AssetId, asset_y: &AssetId) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(PAIR_KEY_DOMAIN);
        hasher.update(asset_x.as_bytes());
        hasher.update(asset_y.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Returns the digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PairKey({})", hex::encode(&self.0[..8]))
    }
}

/// The result of [`PairKey::resolve`]: the key plus the canonical
/// assignment of the two assets to the X and Y reserve slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedPair {
    key: PairKey,
    asset_x: AssetId,
    asset_y: AssetId,
}

impl ResolvedPair {
    /// Returns the pair key.
    #[must_use]
    pub const fn key(&self) -> PairKey {
        self.key
    }

    /// Returns the asset held in the X reserve (lower identifier).
    #[must_use]
    pub const fn asset_x(&self) -> AssetId {
        self.asset_x
    }

    /// Returns the asset held in the Y reserve (higher identifier).
    #[must_use]
    pub const fn asset_y(&self) -> AssetId {
        self.asset_y
    }

    /// Returns `true` if `asset` is one of the two assets.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_x == *asset || self.asset_y == *asset
    }

    /// Returns `true` if `asset` occupies the X slot.
    #[must_use]
    pub fn is_x(&self, asset: &AssetId) -> bool {
        self.asset_x == *asset
    }

    /// Reorders a value pair between caller order and canonical order.
    ///
    /// `values` is given in the order `(first, other)`. When `first` is
    /// the X asset the pair is returned unchanged; otherwise it is swapped.
    /// The mapping is its own inverse, so the same call converts canonical
    /// `(x, y)` values back into caller order.
    ///
    /// ```
    /// use pairswap::domain::{AssetId, PairKey};
    ///
    /// let a = AssetId::from_bytes([9u8; 32]);
    /// let b = AssetId::from_bytes([3u8; 32]);
    /// let pair = PairKey::resolve(a, b).expect("distinct");
    /// // `a` has the higher id, so it sits in the Y slot.
    /// assert_eq!(pair.orient(&a, (10, 20)), (20, 10));
    /// assert_eq!(pair.orient(&b, (20, 10)), (20, 10));
    /// ```
    pub fn orient<T>(&self, first: &AssetId, values: (T, T)) -> (T, T) {
        if self.is_x(first) {
            values
        } else {
            (values.1, values.0)
        }
    }
}
