//! The pool entity: two reserves and a liquidity-share ledger.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::{AccountId, Amount, AssetId, PairKey, ResolvedPair, Shares};
use crate::error::{AmmError, Result};
use crate::math::{widening_mul, U256};

use super::draft::PoolUpdate;

/// Reserves and share ownership for one asset pair.
///
/// Reserves are stored in canonical order: `reserve_x` holds the asset
/// with the lower identifier. Methods that take or return a pair of
/// amounts in caller order name the caller's first asset explicitly and
/// translate through [`ResolvedPair::orient`].
///
/// Pools are owned by a [`PoolRegistry`](super::PoolRegistry) and only
/// change when the registry commits a settled update.
///
/// # Invariants
///
/// - `reserve_x == 0 && reserve_y == 0` iff `total_shares == 0`.
/// - The sum of all holder balances equals `total_shares`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pool {
    pair: ResolvedPair,
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
    holders: HashMap<AccountId, Shares>,
}

impl Pool {
    pub(crate) fn new(pair: ResolvedPair) -> Self {
        Self {
            pair,
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
            total_shares: Shares::ZERO,
            holders: HashMap::new(),
        }
    }

    /// Returns the canonical pair this pool trades.
    #[must_use]
    pub const fn pair(&self) -> &ResolvedPair {
        &self.pair
    }

    /// Returns the pool's key.
    #[must_use]
    pub const fn key(&self) -> PairKey {
        self.pair.key()
    }

    /// Returns `(reserve_x, reserve_y)` in canonical order.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_x, self.reserve_y)
    }

    /// Returns the reserves ordered as `(first, other)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `first` is not in the pair.
    pub fn reserves_for(&self, first: &AssetId) -> Result<(Amount, Amount)> {
        self.require_member(first)?;
        Ok(self.pair.orient(first, self.reserves()))
    }

    /// Returns the total outstanding shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the shares owned by `account`.
    #[must_use]
    pub fn share_balance(&self, account: &AccountId) -> Shares {
        self.holders.get(account).copied().unwrap_or_default()
    }

    /// Iterates over every account holding a non-zero share balance.
    pub fn holders(&self) -> impl Iterator<Item = (&AccountId, Shares)> + '_ {
        self.holders.iter().map(|(account, shares)| (account, *shares))
    }

    /// Returns `true` until the first deposit has been committed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    /// Returns the constant-product invariant `reserve_x * reserve_y`.
    #[must_use]
    pub fn k(&self) -> U256 {
        widening_mul(self.reserve_x.get(), self.reserve_y.get())
    }

    /// Checks the structural invariants listed on the type.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let reserves_empty = self.reserve_x.is_zero() && self.reserve_y.is_zero();
        let reserves_seeded = !self.reserve_x.is_zero() && !self.reserve_y.is_zero();
        let shape_ok = if self.total_shares.is_zero() {
            reserves_empty
        } else {
            reserves_seeded
        };
        let ledger_sum = self
            .holders
            .values()
            .try_fold(0u128, |acc, s| acc.checked_add(s.get()));
        shape_ok && ledger_sum == Some(self.total_shares.get())
    }

    fn require_member(&self, asset: &AssetId) -> Result<()> {
        if self.pair.contains(asset) {
            Ok(())
        } else {
            Err(AmmError::InvalidAsset("asset is not part of this pool"))
        }
    }

    /// Overwrites the reserves and supply and merges staged balances.
    pub(crate) fn apply(&mut self, update: PoolUpdate) {
        (self.reserve_x, self.reserve_y) = update.reserves;
        self.total_shares = update.total_shares;
        for (account, shares) in update.balances {
            if shares.is_zero() {
                self.holders.remove(&account);
            } else {
                self.holders.insert(account, shares);
            }
        }
    }
}
