//! Seam to the external fungible-token transfer mechanism.
//!
//! The engine never stores balances of the traded assets. Moving assets
//! between participants and pool custody is delegated to a
//! [`TokenTransfer`] implementation supplied by the embedding
//! environment; [`InMemoryLedger`](crate::ledger::InMemoryLedger) is the
//! reference implementation.
//!
//! # Failure contract
//!
//! Implementations must report failure reliably: a returned `Err` means
//! nothing moved. The engine aborts the enclosing operation on any `Err`
//! and compensates legs that had already succeeded.

use crate::domain::{AccountId, Amount, AssetId};

/// Reason a transfer leg was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The source does not hold enough of the asset.
    #[error("account {account} holds {available} of asset {asset}, needs {requested}")]
    InsufficientBalance {
        /// Asset being moved.
        asset: AssetId,
        /// Account (or custody) being debited.
        account: AccountId,
        /// Amount requested.
        requested: Amount,
        /// Amount actually held.
        available: Amount,
    },

    /// The transfer layer refused the leg for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(&'static str),
}

/// Moves assets between accounts and pool custody.
pub trait TokenTransfer {
    /// Moves `amount` of `asset` from `account` into pool custody.
    ///
    /// Authorization is the caller's own prior approval, checked by the
    /// implementation.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if nothing was moved.
    fn pull_from(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` of `asset` from pool custody to `account`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if nothing was moved.
    fn push_to(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError>;
}

impl<T: TokenTransfer + ?Sized> TokenTransfer for &mut T {
    fn pull_from(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).pull_from(asset, account, amount)
    }

    fn push_to(
        &mut self,
        asset: AssetId,
        account: AccountId,
        amount: Amount,
    ) -> Result<(), TransferError> {
        (**self).push_to(asset, account, amount)
    }
}
