//! Chain-agnostic asset identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one fungible asset.
///
/// Wraps a fixed-size `[u8; 32]`, so any contract address, mint, or hash
/// fits. The derived `Ord` compares bytes lexicographically; that order is
/// the canonical ordering used to assign a pair's X and Y reserves.
///
/// Serialized as a lowercase hex string.
///
/// ```
/// use pairswap::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// let weth = AssetId::from_bytes([2u8; 32]);
/// assert!(usdc < weth);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AssetId(#[serde(with = "hex::serde")] [u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", hex::encode(&self.0[..4]))
    }
}
