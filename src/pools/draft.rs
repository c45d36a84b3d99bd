//! Copy-on-write staging of one pool's changes.
//!
//! A [`PoolDraft`] copies the reserves and supply of a committed pool and
//! reads holder balances through to it. Only the balances an operation
//! actually changes are copied into the draft, so a swap stages no holder
//! entries at all and a deposit stages at most two.
//!
//! [`PoolDraft::into_update`] releases the borrow of the registry and
//! yields a [`PoolUpdate`] to hand to
//! [`PoolRegistry::commit`](super::PoolRegistry::commit) after settlement.

use crate::domain::{AccountId, Amount, AssetId, PairKey, ResolvedPair, Shares};
use crate::error::{AmmError, Result};
use crate::math::{widening_mul, CheckedArithmetic, U256};

use super::Pool;

/// Working copy of a pool's reserves, supply and touched balances.
#[derive(Debug)]
pub(crate) struct PoolDraft<'a> {
    base: Option<&'a Pool>,
    pair: ResolvedPair,
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
    touched: Vec<(AccountId, Shares)>,
}

/// The net effect of a settled operation on one pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PoolUpdate {
    pub(super) pair: ResolvedPair,
    pub(super) reserves: (Amount, Amount),
    pub(super) total_shares: Shares,
    pub(super) balances: Vec<(AccountId, Shares)>,
}

impl PoolUpdate {
    pub(crate) const fn key(&self) -> PairKey {
        self.pair.key()
    }
}

impl<'a> PoolDraft<'a> {
    /// Stages changes against a committed pool.
    pub(crate) fn of(pool: &'a Pool) -> Self {
        let (reserve_x, reserve_y) = pool.reserves();
        Self {
            base: Some(pool),
            pair: *pool.pair(),
            reserve_x,
            reserve_y,
            total_shares: pool.total_shares(),
            touched: Vec::new(),
        }
    }

    /// Stages the first deposit of a pool that does not exist yet.
    pub(crate) fn fresh(pair: ResolvedPair) -> Self {
        Self {
            base: None,
            pair,
            reserve_x: Amount::ZERO,
            reserve_y: Amount::ZERO,
            total_shares: Shares::ZERO,
            touched: Vec::new(),
        }
    }

    /// `true` if committing this draft creates the pool.
    pub(crate) const fn is_new(&self) -> bool {
        self.base.is_none()
    }

    pub(crate) const fn key(&self) -> PairKey {
        self.pair.key()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.total_shares.is_zero()
    }

    pub(crate) const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    pub(crate) fn k(&self) -> U256 {
        widening_mul(self.reserve_x.get(), self.reserve_y.get())
    }

    /// Reserves ordered as `(first, other)`.
    pub(crate) fn reserves_for(&self, first: &AssetId) -> Result<(Amount, Amount)> {
        self.require_member(first)?;
        Ok(self.pair.orient(first, (self.reserve_x, self.reserve_y)))
    }

    /// Staged balance if touched, committed balance otherwise.
    pub(crate) fn share_balance(&self, account: &AccountId) -> Shares {
        self.touched
            .iter()
            .find(|(holder, _)| holder == account)
            .map(|(_, shares)| *shares)
            .or_else(|| self.base.map(|pool| pool.share_balance(account)))
            .unwrap_or_default()
    }

    /// Adds `(amount_first, amount_other)` to the reserves.
    pub(crate) fn credit_reserves(
        &mut self,
        first: &AssetId,
        amounts: (Amount, Amount),
    ) -> Result<()> {
        self.require_member(first)?;
        let (dx, dy) = self.pair.orient(first, amounts);
        let x = self.reserve_x.safe_add(&dx)?;
        let y = self.reserve_y.safe_add(&dy)?;
        (self.reserve_x, self.reserve_y) = (x, y);
        Ok(())
    }

    /// Removes `(amount_first, amount_other)` from the reserves.
    pub(crate) fn debit_reserves(
        &mut self,
        first: &AssetId,
        amounts: (Amount, Amount),
    ) -> Result<()> {
        self.require_member(first)?;
        let (dx, dy) = self.pair.orient(first, amounts);
        let x = self.reserve_x.safe_sub(&dx)?;
        let y = self.reserve_y.safe_sub(&dy)?;
        (self.reserve_x, self.reserve_y) = (x, y);
        Ok(())
    }

    /// `asset_in` gains `amount_in`, the other reserve loses `amount_out`.
    pub(crate) fn apply_swap(
        &mut self,
        asset_in: &AssetId,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<()> {
        let (reserve_in, reserve_out) = self.reserves_for(asset_in)?;
        let updated = (
            reserve_in.safe_add(&amount_in)?,
            reserve_out.safe_sub(&amount_out)?,
        );
        (self.reserve_x, self.reserve_y) = self.pair.orient(asset_in, updated);
        Ok(())
    }

    /// Credits `shares` to `account` and grows the supply.
    pub(crate) fn mint(&mut self, account: AccountId, shares: Shares) -> Result<()> {
        let total = self.total_shares.safe_add(&shares)?;
        let balance = self.share_balance(&account).safe_add(&shares)?;
        self.total_shares = total;
        self.stage_balance(account, balance);
        Ok(())
    }

    /// Debits `shares` from `account` and shrinks the supply.
    ///
    /// Fails with [`AmmError::InsufficientShares`] if `account` owns fewer
    /// than `shares`.
    pub(crate) fn burn(&mut self, account: &AccountId, shares: Shares) -> Result<()> {
        let available = self.share_balance(account);
        let remaining = available
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientShares {
                requested: shares,
                available,
            })?;
        self.total_shares = self.total_shares.safe_sub(&shares)?;
        self.stage_balance(*account, remaining);
        Ok(())
    }

    pub(crate) fn into_update(self) -> PoolUpdate {
        PoolUpdate {
            pair: self.pair,
            reserves: (self.reserve_x, self.reserve_y),
            total_shares: self.total_shares,
            balances: self.touched,
        }
    }

    fn stage_balance(&mut self, account: AccountId, shares: Shares) {
        match self.touched.iter_mut().find(|(holder, _)| *holder == account) {
            Some(entry) => entry.1 = shares,
            None => self.touched.push((account, shares)),
        }
    }

    fn require_member(&self, asset: &AssetId) -> Result<()> {
        if self.pair.contains(asset) {
            Ok(())
        } else {
            Err(AmmError::InvalidAsset("asset is not part of this pool"))
        }
    }
}
