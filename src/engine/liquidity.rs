//! Liquidity provisioning and withdrawal.
//!
//! # Share minting
//!
//! | Pool state | Shares minted |
//! |------------|---------------|
//! | empty | `floor(√(used_a·used_b)) − MINIMUM_LIQUIDITY`; `MINIMUM_LIQUIDITY` locked to [`AccountId::BURN`] |
//! | seeded | `min(used_a·T / reserve_a, used_b·T / reserve_b)` |
//!
//! Deposits into a seeded pool are trimmed on one side so the reserve
//! ratio never moves; withdrawals pay out `shares·reserve / T` of each
//! asset, rounded down.

use tracing::{debug, info};

use crate::domain::{AccountId, Amount, PairKey, Shares};
use crate::error::{AmmError, Result};
use crate::events::AmmEvent;
use crate::math::{isqrt, mul_div, widening_mul, CheckedArithmetic, Rounding};
use crate::pools::{PoolDraft, Settlement};
use crate::traits::{Clock, EventSink, TokenTransfer};

use super::{quote, AddLiquidity, Amm, RemoveLiquidity};

impl<T: TokenTransfer, C: Clock, E: EventSink> Amm<T, C, E> {
    /// Deposits both assets of a pair and mints shares to
    /// `request.recipient`, creating the pool on its first deposit.
    ///
    /// Returns `(used_a, used_b, shares_minted)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::ZeroAmount`] if either desired amount is zero.
    /// - [`AmmError::InsufficientAmountA`] / [`AmmError::InsufficientAmountB`]
    ///   if the ratio-preserving amount falls below its minimum.
    /// - [`AmmError::InsufficientLiquidityMinted`] if the deposit is worth
    ///   no whole share.
    /// - [`AmmError::TransferFailed`] if either asset cannot be pulled.
    pub fn add_liquidity(
        &mut self,
        caller: AccountId,
        request: AddLiquidity,
    ) -> Result<(Amount, Amount, Shares)> {
        self.ensure_live(request.deadline)?;
        let pair = PairKey::resolve(request.asset_a, request.asset_b)?;
        if request.desired_a.is_zero() || request.desired_b.is_zero() {
            return Err(AmmError::ZeroAmount("desired deposit amounts"));
        }

        let mut pool = self.registry.stage(&pair);
        let created = pool.is_new();
        let (reserve_a, reserve_b) = pool.reserves_for(&request.asset_a)?;

        let (used_a, used_b) = if pool.is_empty() {
            (request.desired_a, request.desired_b)
        } else {
            optimal_amounts(&request, reserve_a, reserve_b)?
        };

        let minted = if pool.is_empty() {
            self.mint_initial(&mut pool, used_a, used_b)?
        } else {
            mint_proportional(&pool, used_a, used_b, reserve_a, reserve_b)?
        };
        debug!(pair = %pair.key(), %used_a, %used_b, %minted, "deposit priced");

        pool.credit_reserves(&request.asset_a, (used_a, used_b))?;
        pool.mint(request.recipient, minted)?;
        let update = pool.into_update();

        let mut settlement = Settlement::new(&mut self.transfers);
        settlement.pull(request.asset_a, caller, used_a)?;
        settlement.pull(request.asset_b, caller, used_b)?;
        settlement.finish();

        let key = update.key();
        self.registry.commit(update);

        if created {
            info!(pair = %key, asset_x = %pair.asset_x(), asset_y = %pair.asset_y(), "pool created");
            self.events.emit(AmmEvent::PoolCreated {
                pair: key,
                asset_x: pair.asset_x(),
                asset_y: pair.asset_y(),
            });
        }
        info!(
            pair = %key,
            account = %caller,
            recipient = %request.recipient,
            amount_a = %used_a,
            amount_b = %used_b,
            shares = %minted,
            "liquidity added"
        );
        self.events.emit(AmmEvent::LiquidityAdded {
            account: caller,
            recipient: request.recipient,
            asset_a: request.asset_a,
            asset_b: request.asset_b,
            amount_a: used_a,
            amount_b: used_b,
            shares: minted,
        });

        Ok((used_a, used_b, minted))
    }

    /// Burns `request.shares` of the caller's shares and pays the
    /// proportional slice of both reserves to `request.recipient`.
    ///
    /// Returns `(amount_a, amount_b)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::ReservedAccount`] if the caller is the burn account.
    /// - [`AmmError::ZeroAmount`] if `request.shares` is zero.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientShares`] if the caller owns too few shares.
    /// - [`AmmError::InsufficientLiquidityBurned`] if either payout rounds
    ///   to zero.
    /// - [`AmmError::InsufficientAmountA`] / [`AmmError::InsufficientAmountB`]
    ///   if a payout falls below its minimum.
    /// - [`AmmError::TransferFailed`] if either asset cannot be pushed.
    pub fn remove_liquidity(
        &mut self,
        caller: AccountId,
        request: RemoveLiquidity,
    ) -> Result<(Amount, Amount)> {
        self.ensure_live(request.deadline)?;
        if caller.is_burn() {
            return Err(AmmError::ReservedAccount);
        }
        if request.shares.is_zero() {
            return Err(AmmError::ZeroAmount("shares"));
        }
        let pair = PairKey::resolve(request.asset_a, request.asset_b)?;

        if !self.registry.contains(&pair.key()) {
            return Err(AmmError::InsufficientShares {
                requested: request.shares,
                available: Shares::ZERO,
            });
        }
        let mut pool = self.registry.stage(&pair);

        let available = pool.share_balance(&caller);
        if available < request.shares {
            return Err(AmmError::InsufficientShares {
                requested: request.shares,
                available,
            });
        }

        let total = pool.total_shares();
        let (reserve_a, reserve_b) = pool.reserves_for(&request.asset_a)?;
        let amount_a = pro_rata(request.shares, reserve_a, total)?;
        let amount_b = pro_rata(request.shares, reserve_b, total)?;
        debug!(pair = %pair.key(), %amount_a, %amount_b, shares = %request.shares, "withdrawal priced");

        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }
        if amount_a < request.min_a {
            return Err(AmmError::InsufficientAmountA);
        }
        if amount_b < request.min_b {
            return Err(AmmError::InsufficientAmountB);
        }

        pool.burn(&caller, request.shares)?;
        pool.debit_reserves(&request.asset_a, (amount_a, amount_b))?;
        let update = pool.into_update();

        let mut settlement = Settlement::new(&mut self.transfers);
        settlement.push(request.asset_a, request.recipient, amount_a)?;
        settlement.push(request.asset_b, request.recipient, amount_b)?;
        settlement.finish();

        let key = update.key();
        self.registry.commit(update);

        info!(
            pair = %key,
            account = %caller,
            recipient = %request.recipient,
            %amount_a,
            %amount_b,
            shares = %request.shares,
            "liquidity removed"
        );
        self.events.emit(AmmEvent::LiquidityRemoved {
            account: caller,
            recipient: request.recipient,
            asset_a: request.asset_a,
            asset_b: request.asset_b,
            amount_a,
            amount_b,
            shares: request.shares,
        });

        Ok((amount_a, amount_b))
    }

    /// Seeds an empty pool: locks the minimum liquidity to the burn
    /// account and returns the depositor's share.
    fn mint_initial(
        &self,
        pool: &mut PoolDraft<'_>,
        used_a: Amount,
        used_b: Amount,
    ) -> Result<Shares> {
        let root = Shares::new(isqrt(widening_mul(used_a.get(), used_b.get())));
        let locked = self.config.minimum_liquidity();
        if root <= locked {
            return Err(AmmError::InsufficientLiquidityMinted);
        }
        pool.mint(AccountId::BURN, locked)?;
        root.safe_sub(&locked)
    }
}

/// One-sided adjustment of a deposit to the current reserve ratio.
fn optimal_amounts(
    request: &AddLiquidity,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<(Amount, Amount)> {
    let optimal_b = quote(request.desired_a, reserve_a, reserve_b)?;
    if optimal_b <= request.desired_b {
        debug!(%optimal_b, "deposit limited by asset a");
        if optimal_b < request.min_b {
            return Err(AmmError::InsufficientAmountB);
        }
        return Ok((request.desired_a, optimal_b));
    }

    let optimal_a = quote(request.desired_b, reserve_b, reserve_a)?;
    debug!(%optimal_a, "deposit limited by asset b");
    if optimal_a < request.min_a {
        return Err(AmmError::InsufficientAmountA);
    }
    Ok((optimal_a, request.desired_b))
}

fn mint_proportional(
    pool: &PoolDraft<'_>,
    used_a: Amount,
    used_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<Shares> {
    let total = pool.total_shares().get();
    let by_a = mul_div(used_a.get(), total, reserve_a.get(), Rounding::Down)?;
    let by_b = mul_div(used_b.get(), total, reserve_b.get(), Rounding::Down)?;
    let minted = by_a.min(by_b);
    if minted == 0 {
        return Err(AmmError::InsufficientLiquidityMinted);
    }
    Ok(Shares::new(minted))
}

fn pro_rata(shares: Shares, reserve: Amount, total: Shares) -> Result<Amount> {
    mul_div(shares.get(), reserve.get(), total.get(), Rounding::Down).map(Amount::new)
}
