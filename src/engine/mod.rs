//! The AMM facade: liquidity, swaps and price queries over a registry.
//!
//! [`Amm`] owns the [`PoolRegistry`] together with its three
//! collaborators:
//!
//! | Parameter | Trait | Role |
//! |-----------|-------|------|
//! | `T` | [`TokenTransfer`] | Moves assets in and out of pool custody |
//! | `C` | [`Clock`] | Current time for deadline checks |
//! | `E` | [`EventSink`] | Receives notifications of committed operations |
//!
//! Every mutating operation takes `&mut self` and runs to completion:
//! validate, compute on a staged draft of the pool, settle the transfer
//! legs, commit, notify. A failure at any step returns `Err` with the
//! registry, the transfer layer and the sink exactly as before the call.
//!
//! # Example
//!
//! ```
//! use pairswap::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([0xA1; 32]);
//!
//! let mut ledger = InMemoryLedger::new();
//! ledger.mint(usdc, alice, Amount::new(10_000)).expect("mint");
//! ledger.mint(weth, alice, Amount::new(10_000)).expect("mint");
//!
//! let clock = ManualClock::new(Timestamp::from_secs(1_000));
//! let mut amm = Amm::new(ledger, clock, RecordingSink::new());
//!
//! let (_, _, shares) = amm
//!     .add_liquidity(alice, AddLiquidity {
//!         asset_a: usdc,
//!         asset_b: weth,
//!         desired_a: Amount::new(1_000),
//!         desired_b: Amount::new(4_000),
//!         min_a: Amount::ZERO,
//!         min_b: Amount::ZERO,
//!         recipient: alice,
//!         deadline: Timestamp::from_secs(1_060),
//!     })
//!     .expect("first deposit");
//! assert_eq!(shares, Shares::new(1_000));
//!
//! let out = amm
//!     .swap_exact(alice, SwapExactIn {
//!         amount_in: Amount::new(100),
//!         amount_out_min: Amount::new(360),
//!         asset_in: usdc,
//!         asset_out: weth,
//!         recipient: alice,
//!         deadline: Timestamp::from_secs(1_060),
//!     })
//!     .expect("swap");
//! assert_eq!(out, Amount::new(362));
//! assert_eq!(
//!     amm.get_reserves(weth, usdc).expect("distinct"),
//!     (Amount::new(3_638), Amount::new(1_100)),
//! );
//! ```

mod liquidity;
mod oracle;
mod pricing;
mod request;
mod swap;

pub use pricing::{get_amount_in, get_amount_out, quote};
pub use request::{AddLiquidity, RemoveLiquidity, SwapExactIn, SwapExactOut};

use crate::config::AmmConfig;
use crate::domain::{AccountId, AssetId, PairKey, Shares, Timestamp};
use crate::error::{AmmError, Result};
use crate::pools::{Pool, PoolRegistry};
use crate::traits::{Clock, EventSink, TokenTransfer};

/// Constant-product market maker over any number of asset pairs.
#[derive(Debug)]
pub struct Amm<T, C, E> {
    config: AmmConfig,
    registry: PoolRegistry,
    transfers: T,
    clock: C,
    events: E,
}

impl<T: TokenTransfer, C: Clock, E: EventSink> Amm<T, C, E> {
    /// Creates an engine with [`AmmConfig::default`].
    pub fn new(transfers: T, clock: C, events: E) -> Self {
        Self {
            config: AmmConfig::default(),
            registry: PoolRegistry::new(),
            transfers,
            clock,
            events,
        }
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` fails
    /// [`AmmConfig::validate`].
    pub fn with_config(config: AmmConfig, transfers: T, clock: C, events: E) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            registry: PoolRegistry::new(),
            transfers,
            clock,
            events,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &AmmConfig {
        &self.config
    }

    /// Returns the pool registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry {
        &self.registry
    }

    /// Returns the token-transfer collaborator.
    #[must_use]
    pub const fn transfers(&self) -> &T {
        &self.transfers
    }

    /// Returns the token-transfer collaborator mutably, e.g. to fund
    /// accounts between operations.
    pub fn transfers_mut(&mut self) -> &mut T {
        &mut self.transfers
    }

    /// Returns the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the event sink.
    #[must_use]
    pub const fn events(&self) -> &E {
        &self.events
    }

    /// Returns the event sink mutably.
    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// Consumes the engine, returning its collaborators.
    pub fn into_parts(self) -> (T, C, E) {
        (self.transfers, self.clock, self.events)
    }

    /// Returns the pool for the unordered pair `{asset_a, asset_b}`, if it
    /// has been created.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if `asset_a == asset_b`.
    pub fn pool(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Option<&Pool>> {
        let pair = PairKey::resolve(asset_a, asset_b)?;
        Ok(self.registry.get(&pair.key()))
    }

    /// Number of pools created so far.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.registry.len()
    }

    /// Shares of the `{asset_a, asset_b}` pool owned by `account`; zero if
    /// the pool does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if `asset_a == asset_b`.
    pub fn share_balance(
        &self,
        asset_a: AssetId,
        asset_b: AssetId,
        account: AccountId,
    ) -> Result<Shares> {
        Ok(self
            .pool(asset_a, asset_b)?
            .map_or(Shares::ZERO, |pool| pool.share_balance(&account)))
    }

    /// Total shares of the `{asset_a, asset_b}` pool; zero if the pool
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalAssets`] if `asset_a == asset_b`.
    pub fn total_shares(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Shares> {
        Ok(self
            .pool(asset_a, asset_b)?
            .map_or(Shares::ZERO, Pool::total_shares))
    }

    fn ensure_live(&self, deadline: Timestamp) -> Result<()> {
        let now = self.clock.now();
        if deadline.has_expired(now) {
            return Err(AmmError::Expired { deadline, now });
        }
        Ok(())
    }
}


#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::domain::{Amount, FeeTier};
    use crate::ledger::InMemoryLedger;
    use crate::traits::{ManualClock, RecordingSink};

    #[test]
    fn with_config_rejects_invalid() {
        // Deserializing directly skips the validating constructors.
        let Ok(bad) = serde_json::from_str::<AmmConfig>(r#"{"minimum_liquidity": 0}"#) else {
            panic!("well-formed json");
        };
        let Err(AmmError::InvalidConfiguration(_)) = Amm::with_config(
            bad,
            InMemoryLedger::new(),
            ManualClock::new(NOW),
            RecordingSink::new(),
        ) else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn with_config_accepts_fee_free_tier() {
        let Ok(config) = AmmConfig::from_json_str(r#"{"fee_tier": 0}"#) else {
            panic!("valid config");
        };
        let Ok(amm) = Amm::with_config(
            config,
            InMemoryLedger::new(),
            ManualClock::new(NOW),
            RecordingSink::new(),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(amm.config().fee_tier(), FeeTier::ZERO);
    }

    #[test]
    fn queries_on_fresh_engine() {
        let amm = amm();
        assert_eq!(amm.pool_count(), 0);
        let Ok(None) = amm.pool(tka(), tkb()) else {
            panic!("expected no pool");
        };
        assert_eq!(amm.total_shares(tka(), tkb()), Ok(Shares::ZERO));
        assert_eq!(amm.share_balance(tka(), tkb(), alice()), Ok(Shares::ZERO));
        let Err(AmmError::IdenticalAssets) = amm.pool(tka(), tka()) else {
            panic!("expected IdenticalAssets");
        };
    }

    #[test]
    fn queries_after_seed() {
        let amm = seeded();
        assert_eq!(amm.pool_count(), 1);
        assert_eq!(amm.total_shares(tkb(), tka()), Ok(Shares::new(2_000)));
        assert_eq!(amm.share_balance(tka(), tkb(), alice()), Ok(Shares::new(1_000)));
        assert_eq!(
            amm.share_balance(tka(), tkb(), AccountId::BURN),
            Ok(Shares::new(1_000))
        );
        assert_eq!(
            amm.transfers().balance_of(tka(), alice()),
            Amount::new(999_000)
        );
    }

    #[test]
    fn deadline_equal_to_now_is_live() {
        let amm = amm();
        assert!(amm.ensure_live(NOW).is_ok());
        let Err(AmmError::Expired { deadline, now }) =
            amm.ensure_live(Timestamp::from_secs(999))
        else {
            panic!("expected Expired");
        };
        assert_eq!(deadline, Timestamp::from_secs(999));
        assert_eq!(now, NOW);
    }

    #[test]
    fn into_parts_returns_collaborators() {
        let amm = seeded();
        let (ledger, clock, sink) = amm.into_parts();
        assert_eq!(ledger.custody_of(tka()), Amount::new(1_000));
        assert_eq!(clock.now(), NOW);
        assert_eq!(sink.events().len(), 2);
    }
}
