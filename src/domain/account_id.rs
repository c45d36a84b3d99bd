//! Account identifiers for share holders and transfer endpoints.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a participant: a liquidity provider, a trader, or a
/// transfer recipient.
///
/// The all-zero identifier is reserved as [`AccountId::BURN`], the
/// unrecoverable holder of each pool's locked minimum liquidity.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(#[serde(with = "hex::serde")] [u8; 32]);

impl AccountId {
    /// The burn account. Shares credited here can never be withdrawn.
    pub const BURN: Self = Self([0u8; 32]);

    /// Creates an `AccountId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns `true` for [`AccountId::BURN`].
    #[must_use]
    pub fn is_burn(&self) -> bool {
        *self == Self::BURN
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_burn() {
            return f.write_str("AccountId(burn)");
        }
        write!(f, "AccountId({})", hex::encode(&self.0[..4]))
    }
}
