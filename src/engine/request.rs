//! Parameters of the mutating operations.
//!
//! Amount pairs are always in caller order: `amount_a` belongs to
//! `asset_a` regardless of which asset the pool stores first.

use serde::{Deserialize, Serialize};

use crate::domain::{AccountId, Amount, AssetId, Shares, Timestamp};

/// Deposit of two assets into a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidity {
    /// First asset.
    pub asset_a: AssetId,
    /// Second asset.
    pub asset_b: AssetId,
    /// Most of `asset_a` the caller is willing to deposit.
    pub desired_a: Amount,
    /// Most of `asset_b` the caller is willing to deposit.
    pub desired_b: Amount,
    /// Least of `asset_a` the caller accepts depositing.
    pub min_a: Amount,
    /// Least of `asset_b` the caller accepts depositing.
    pub min_b: Amount,
    /// Account credited with the minted shares.
    pub recipient: AccountId,
    /// Latest time at which the deposit may execute.
    pub deadline: Timestamp,
}

/// Withdrawal of a proportional slice of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveLiquidity {
    /// First asset.
    pub asset_a: AssetId,
    /// Second asset.
    pub asset_b: AssetId,
    /// Shares to burn from the caller's balance.
    pub shares: Shares,
    /// Least of `asset_a` the caller accepts receiving.
    pub min_a: Amount,
    /// Least of `asset_b` the caller accepts receiving.
    pub min_b: Amount,
    /// Account receiving both assets.
    pub recipient: AccountId,
    /// Latest time at which the withdrawal may execute.
    pub deadline: Timestamp,
}

/// Sale of an exact input amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapExactIn {
    /// Amount of `asset_in` to sell.
    pub amount_in: Amount,
    /// Least of `asset_out` the caller accepts.
    pub amount_out_min: Amount,
    /// Asset sold.
    pub asset_in: AssetId,
    /// Asset bought.
    pub asset_out: AssetId,
    /// Account receiving `asset_out`.
    pub recipient: AccountId,
    /// Latest time at which the swap may execute.
    pub deadline: Timestamp,
}

/// Purchase of an exact output amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapExactOut {
    /// Amount of `asset_out` to buy.
    pub amount_out: Amount,
    /// Most of `asset_in` the caller accepts paying.
    pub amount_in_max: Amount,
    /// Asset sold.
    pub asset_in: AssetId,
    /// Asset bought.
    pub asset_out: AssetId,
    /// Account receiving `asset_out`.
    pub recipient: AccountId,
    /// Latest time at which the swap may execute.
    pub deadline: Timestamp,
}
