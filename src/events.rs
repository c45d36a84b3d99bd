//! Notifications emitted after committed operations.
//!
//! Events are observable side output only; the engine never reads them
//! back. Amounts are reported in the caller's argument order, not the
//! pool's canonical order.

use serde::Serialize;

use crate::domain::{AccountId, Amount, AssetId, PairKey, Shares};

/// A committed state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AmmEvent {
    /// A pool was created by the first deposit for its pair.
    PoolCreated {
        /// Pair key of the new pool.
        pair: PairKey,
        /// Asset in the X reserve slot.
        asset_x: AssetId,
        /// Asset in the Y reserve slot.
        asset_y: AssetId,
    },

    /// Liquidity was deposited.
    LiquidityAdded {
        /// Account that supplied the assets.
        account: AccountId,
        /// Account credited with the minted shares.
        recipient: AccountId,
        /// First asset as named by the caller.
        asset_a: AssetId,
        /// Second asset as named by the caller.
        asset_b: AssetId,
        /// Amount of `asset_a` deposited.
        amount_a: Amount,
        /// Amount of `asset_b` deposited.
        amount_b: Amount,
        /// Shares minted to `recipient`.
        shares: Shares,
    },

    /// Liquidity was withdrawn.
    LiquidityRemoved {
        /// Account whose shares were burned.
        account: AccountId,
        /// Account that received the assets.
        recipient: AccountId,
        /// First asset as named by the caller.
        asset_a: AssetId,
        /// Second asset as named by the caller.
        asset_b: AssetId,
        /// Amount of `asset_a` returned.
        amount_a: Amount,
        /// Amount of `asset_b` returned.
        amount_b: Amount,
        /// Shares burned.
        shares: Shares,
    },

    /// A swap was executed.
    Swap {
        /// Account that supplied the input.
        account: AccountId,
        /// Account that received the output.
        recipient: AccountId,
        /// Asset sold to the pool.
        asset_in: AssetId,
        /// Asset bought from the pool.
        asset_out: AssetId,
        /// Amount of `asset_in` paid.
        amount_in: Amount,
        /// Amount of `asset_out` received.
        amount_out: Amount,
    },
}

impl AmmEvent {
    /// Short name of the event kind, matching its serialized `type` tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PoolCreated { .. } => "pool_created",
            Self::LiquidityAdded { .. } => "liquidity_added",
            Self::LiquidityRemoved { .. } => "liquidity_removed",
            Self::Swap { .. } => "swap",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let event = AmmEvent::Swap {
            account: AccountId::from_bytes([1u8; 32]),
            recipient: AccountId::from_bytes([1u8; 32]),
            asset_in: AssetId::from_bytes([2u8; 32]),
            asset_out: AssetId::from_bytes([3u8; 32]),
            amount_in: Amount::new(100),
            amount_out: Amount::new(362),
        };
        let Ok(value) = serde_json::to_value(&event) else {
            panic!("serialize");
        };
        assert_eq!(value["type"], event.kind());
        assert_eq!(value["amount_out"], 362);
        assert_eq!(value["asset_in"], "02".repeat(32));
    }
}
