//! In-memory token ledger.
//!
//! [`InMemoryLedger`] is a reference [`TokenTransfer`] implementation:
//! per-account balances of every asset plus one custody balance per asset
//! for the pools. It is what the tests and the demo program settle
//! against, and it can be told to fail specific legs so rollback paths
//! can be exercised.

use std::collections::{HashMap, HashSet};

use crate::domain::{AccountId, Amount, AssetId};
use crate::traits::{TokenTransfer, TransferError};

/// Balance book for arbitrary assets, with fault injection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<(AssetId, AccountId), Amount>,
    custody: HashMap<AssetId, Amount>,
    frozen_assets: HashSet<AssetId>,
    fail_after: Option<usize>,
    legs: usize,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Rejected`] if the balance would overflow.
    pub fn mint(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let balance = self.balances.entry((asset, account)).or_default();
        *balance = balance
            .checked_add(&amount)
            .ok_or(TransferError::Rejected("balance overflow"))?;
        Ok(())
    }

    /// Returns the balance of `asset` held by `account`.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        self.balances
            .get(&(asset, account))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the amount of `asset` held in pool custody.
    #[must_use]
    pub fn custody_of(&self, asset: AssetId) -> Amount {
        self.custody.get(&asset).copied().unwrap_or_default()
    }

    /// Rejects every subsequent leg that moves `asset`.
    pub fn freeze_asset(&mut self, asset: AssetId) {
        self.frozen_assets.insert(asset);
    }

    /// Lets `asset` move again.
    pub fn unfreeze_asset(&mut self, asset: AssetId) {
        self.frozen_assets.remove(&asset);
    }

    /// Lets the next `legs` transfers succeed and rejects the one after
    /// them. The fault fires once.
    pub fn fail_after(&mut self, legs: usize) {
        self.fail_after = Some(self.legs.saturating_add(legs));
    }

    /// Removes every injected fault.
    pub fn clear_faults(&mut self) {
        self.frozen_assets.clear();
        self.fail_after = None;
    }

    /// Number of legs that have moved funds so far.
    #[must_use]
    pub const fn completed_legs(&self) -> usize {
        self.legs
    }

    fn check_faults(&mut self, asset: &AssetId) -> Result<(), TransferError> {
        if self.frozen_assets.contains(asset) {
            return Err(TransferError::Rejected("asset is frozen"));
        }
        if self.fail_after.is_some_and(|limit| self.legs >= limit) {
            self.fail_after = None;
            return Err(TransferError::Rejected("injected failure"));
        }
        Ok(())
    }

    fn debit(
        available: Amount,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<Amount, TransferError> {
        available
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance {
                asset,
                account,
                requested: amount,
                available,
            })
    }
}

impl TokenTransfer for InMemoryLedger {
    fn pull_from(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.check_faults(&asset)?;

        let from = Self::debit(self.balance_of(asset, account), asset, account, amount)?;
        let to = self
            .custody_of(asset)
            .checked_add(&amount)
            .ok_or(TransferError::Rejected("custody overflow"))?;

        self.balances.insert((asset, account), from);
        self.custody.insert(asset, to);
        self.legs = self.legs.saturating_add(1);
        Ok(())
    }

    fn push_to(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.check_faults(&asset)?;

        // Custody shortfalls are reported against the burn account.
        let from = Self::debit(self.custody_of(asset), asset, AccountId::BURN, amount)?;
        let to = self
            .balance_of(asset, account)
            .checked_add(&amount)
            .ok_or(TransferError::Rejected("balance overflow"))?;

        self.custody.insert(asset, from);
        self.balances.insert((asset, account), to);
        self.legs = self.legs.saturating_add(1);
        Ok(())
    }
}
