//! Unified error types for the pairswap library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every variant is produced by a precondition gate or a
//! checked arithmetic step that runs before any state is committed, so an
//! `Err` always means the operation left the pools and ledger untouched.

use crate::domain::{Shares, Timestamp};
use crate::traits::TransferError;

/// Crate-wide error enum.
///
/// Variants fall into three groups:
///
/// - **Caller errors**: expired deadline, identical assets, zero amounts,
///   slippage bounds, insufficient share balance.
/// - **Pool errors**: empty or undersized pool, deposits or withdrawals
///   too small to be represented as whole shares.
/// - **Infrastructure errors**: arithmetic overflow, configuration
///   problems, and failures reported by the token-transfer collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// The caller-supplied deadline is earlier than the current time.
    #[error("deadline {deadline} expired (now {now})")]
    Expired {
        /// Deadline supplied by the caller.
        deadline: Timestamp,
        /// Clock reading at the time of the call.
        now: Timestamp,
    },

    /// Both sides of a pair name the same asset.
    #[error("identical assets cannot form a pair")]
    IdenticalAssets,

    /// An asset identifier is not part of the pool it was used against.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// Swap output fell below the caller's minimum.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// Swap input exceeded the caller's maximum.
    #[error("excessive input amount")]
    ExcessiveInputAmount,

    /// The amount of asset A used or returned fell below its minimum.
    #[error("insufficient amount of asset A")]
    InsufficientAmountA,

    /// The amount of asset B used or returned fell below its minimum.
    #[error("insufficient amount of asset B")]
    InsufficientAmountB,

    /// The pool is empty or too shallow for the requested operation.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// A deposit was too small to mint at least one share.
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A withdrawal was too small to return any asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// A required amount was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// The caller holds fewer shares than requested.
    #[error("insufficient shares: requested {requested}, available {available}")]
    InsufficientShares {
        /// Shares the caller asked to burn.
        requested: Shares,
        /// Shares the caller actually owns.
        available: Shares,
    },

    /// The burn account attempted an operation reserved for real holders.
    #[error("the burn account cannot perform this operation")]
    ReservedAccount,

    /// The constant-product invariant would decrease.
    #[error("constant product invariant violated")]
    KInvariantViolation,

    /// The token-transfer collaborator rejected a transfer leg.
    #[error("transfer failed: {0}")]
    TransferFailed(#[from] TransferError),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

impl AmmError {
    /// Returns `true` for slippage-bound failures.
    ///
    /// These are the errors a caller typically resolves by resubmitting
    /// with relaxed bounds.
    #[must_use]
    pub const fn is_slippage(&self) -> bool {
        matches!(
            self,
            Self::InsufficientOutputAmount
                | Self::ExcessiveInputAmount
                | Self::InsufficientAmountA
                | Self::InsufficientAmountB
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn display_expired() {
        let err = AmmError::Expired {
            deadline: Timestamp::from_secs(10),
            now: Timestamp::from_secs(11),
        };
        assert_eq!(err.to_string(), "deadline 10 expired (now 11)");
    }

    #[test]
    fn display_insufficient_shares() {
        let err = AmmError::InsufficientShares {
            requested: Shares::new(5),
            available: Shares::new(3),
        };
        assert_eq!(
            err.to_string(),
            "insufficient shares: requested 5, available 3"
        );
    }

    #[test]
    fn slippage_classification() {
        assert!(AmmError::InsufficientOutputAmount.is_slippage());
        assert!(AmmError::ExcessiveInputAmount.is_slippage());
        assert!(AmmError::InsufficientAmountA.is_slippage());
        assert!(!AmmError::InsufficientLiquidity.is_slippage());
        assert!(!AmmError::ZeroAmount("x").is_slippage());
    }

    #[test]
    fn transfer_error_converts() {
        let inner = TransferError::Rejected("frozen");
        let err: AmmError = inner.clone().into();
        assert_eq!(err, AmmError::TransferFailed(inner));
    }
}
