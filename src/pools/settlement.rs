//! All-or-nothing execution of transfer legs.
//!
//! A [`Settlement`] forwards each leg to the [`TokenTransfer`]
//! collaborator and remembers the ones that went through. If a leg fails,
//! or the settlement is dropped before [`finish`](Settlement::finish), the
//! completed legs are reversed newest-first:
//!
//! | Completed leg | Compensation |
//! |---------------|--------------|
//! | `pull_from(account)` | `push_to(account)` |
//! | `push_to(account)` | `pull_from(account)` |
//!
//! Zero-amount legs are skipped entirely.

use tracing::{error, warn};

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::Result;
use crate::traits::TokenTransfer;

#[derive(Debug, Clone, Copy)]
enum Leg {
    Pull {
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    },
    Push {
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    },
}

/// A transfer saga over one operation's legs.
///
/// ```
/// use pairswap::domain::{AccountId, Amount, AssetId};
/// use pairswap::ledger::InMemoryLedger;
/// use pairswap::pools::Settlement;
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([2u8; 32]);
/// let mut ledger = InMemoryLedger::new();
/// ledger.mint(asset, alice, Amount::new(10)).expect("mint");
///
/// {
///     let mut settlement = Settlement::new(&mut ledger);
///     settlement.pull(asset, alice, Amount::new(10)).expect("pull");
///     // dropped without `finish`: the pull is reversed
/// }
/// assert_eq!(ledger.balance_of(asset, alice), Amount::new(10));
/// ```
#[derive(Debug)]
pub struct Settlement<'a, T: TokenTransfer> {
    transfers: &'a mut T,
    completed: Vec<Leg>,
    finished: bool,
}

impl<'a, T: TokenTransfer> Settlement<'a, T> {
    /// Starts a settlement against `transfers`.
    pub fn new(transfers: &'a mut T) -> Self {
        Self {
            transfers,
            completed: Vec::new(),
            finished: false,
        }
    }

    /// Moves `amount` of `asset` from `account` into pool custody.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed)
    /// after reversing every leg completed so far.
    pub fn pull(&mut self, asset: AssetId, account: AccountId, amount: Amount) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        match self.transfers.pull_from(asset, account, amount) {
            Ok(()) => {
                self.completed.push(Leg::Pull {
                    asset,
                    account,
                    amount,
                });
                Ok(())
            }
            Err(err) => {
                warn!(%asset, %account, %amount, error = %err, "pull leg failed");
                self.compensate();
                Err(err.into())
            }
        }
    }

    /// Moves `amount` of `asset` from pool custody to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed)
    /// after reversing every leg completed so far.
    pub fn push(&mut self, asset: AssetId, account: AccountId, amount: Amount) -> Result<()> {
        if amount.is_zero() {
            return Ok(());
        }
        match self.transfers.push_to(asset, account, amount) {
            Ok(()) => {
                self.completed.push(Leg::Push {
                    asset,
                    account,
                    amount,
                });
                Ok(())
            }
            Err(err) => {
                warn!(%asset, %account, %amount, error = %err, "push leg failed");
                self.compensate();
                Err(err.into())
            }
        }
    }

    /// Number of legs executed so far.
    #[must_use]
    pub fn completed_legs(&self) -> usize {
        self.completed.len()
    }

    /// Marks every leg as final. Nothing is reversed after this.
    pub fn finish(mut self) {
        self.finished = true;
        self.completed.clear();
    }

    fn compensate(&mut self) {
        while let Some(leg) = self.completed.pop() {
            let outcome = match leg {
                Leg::Pull {
                    asset,
                    account,
                    amount,
                } => {
                    warn!(%asset, %account, %amount, "reversing pull leg");
                    self.transfers.push_to(asset, account, amount)
                }
                Leg::Push {
                    asset,
                    account,
                    amount,
                } => {
                    warn!(%asset, %account, %amount, "reversing push leg");
                    self.transfers.pull_from(asset, account, amount)
                }
            };
            if let Err(err) = outcome {
                error!(?leg, error = %err, "compensation leg failed");
            }
        }
    }
}

impl<T: TokenTransfer> Drop for Settlement<'_, T> {
    fn drop(&mut self) {
        if !self.finished && !self.completed.is_empty() {
            warn!(legs = self.completed.len(), "settlement abandoned");
            self.compensate();
        }
    }
}
