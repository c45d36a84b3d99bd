//! Single-hop swaps against one pool.

use tracing::{debug, info, warn};

use crate::domain::{AccountId, Amount, AssetId, PairKey};
use crate::error::{AmmError, Result};
use crate::events::AmmEvent;
use crate::pools::{Pool, PoolDraft, PoolUpdate, Settlement};
use crate::traits::{Clock, EventSink, TokenTransfer};

use super::{get_amount_in, get_amount_out, Amm, SwapExactIn, SwapExactOut};

/// A priced swap awaiting settlement.
struct Fill {
    asset_in: AssetId,
    asset_out: AssetId,
    amount_in: Amount,
    amount_out: Amount,
    recipient: AccountId,
}

impl<T: TokenTransfer, C: Clock, E: EventSink> Amm<T, C, E> {
    /// Sells exactly `request.amount_in` and returns the amount bought.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::ZeroAmount`] if `request.amount_in` is zero.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is missing or empty.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to
    ///   zero or falls below `request.amount_out_min`.
    /// - [`AmmError::TransferFailed`] if either leg fails.
    pub fn swap_exact(&mut self, caller: AccountId, request: SwapExactIn) -> Result<Amount> {
        self.ensure_live(request.deadline)?;
        if request.amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("amount_in"));
        }
        let pool = self.tradeable_pool(request.asset_in, request.asset_out)?;

        let (reserve_in, reserve_out) = pool.reserves_for(&request.asset_in)?;
        let amount_out = get_amount_out(
            request.amount_in,
            reserve_in,
            reserve_out,
            self.config.fee_tier(),
        )?;
        debug!(pair = %pool.key(), amount_in = %request.amount_in, %amount_out, "exact-in swap priced");

        if amount_out.is_zero() || amount_out < request.amount_out_min {
            return Err(AmmError::InsufficientOutputAmount);
        }

        let fill = Fill {
            asset_in: request.asset_in,
            asset_out: request.asset_out,
            amount_in: request.amount_in,
            amount_out,
            recipient: request.recipient,
        };
        let update = stage_swap(pool, &fill)?;
        self.settle(caller, update, &fill)?;
        Ok(amount_out)
    }

    /// Buys exactly `request.amount_out` and returns the amount sold.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Expired`] past the deadline.
    /// - [`AmmError::ZeroAmount`] if `request.amount_out` is zero.
    /// - [`AmmError::IdenticalAssets`] if both assets are the same.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is missing, empty,
    ///   or holds no more than `request.amount_out`.
    /// - [`AmmError::ExcessiveInputAmount`] if the required input exceeds
    ///   `request.amount_in_max`.
    /// - [`AmmError::TransferFailed`] if either leg fails.
    pub fn swap_for_exact(&mut self, caller: AccountId, request: SwapExactOut) -> Result<Amount> {
        self.ensure_live(request.deadline)?;
        if request.amount_out.is_zero() {
            return Err(AmmError::ZeroAmount("amount_out"));
        }
        let pool = self.tradeable_pool(request.asset_in, request.asset_out)?;

        let (reserve_in, reserve_out) = pool.reserves_for(&request.asset_in)?;
        let amount_in = get_amount_in(
            request.amount_out,
            reserve_in,
            reserve_out,
            self.config.fee_tier(),
        )?;
        debug!(pair = %pool.key(), %amount_in, amount_out = %request.amount_out, "exact-out swap priced");

        if amount_in > request.amount_in_max {
            return Err(AmmError::ExcessiveInputAmount);
        }

        let fill = Fill {
            asset_in: request.asset_in,
            asset_out: request.asset_out,
            amount_in,
            amount_out: request.amount_out,
            recipient: request.recipient,
        };
        let update = stage_swap(pool, &fill)?;
        self.settle(caller, update, &fill)?;
        Ok(amount_in)
    }

    /// Output of selling `amount_in` of `asset_in` into the current
    /// `{asset_in, asset_out}` pool at the configured fee.
    ///
    /// # Errors
    ///
    /// As [`swap_exact`](Self::swap_exact), minus deadline and transfer
    /// failures.
    pub fn quote_exact_in(
        &self,
        amount_in: Amount,
        asset_in: AssetId,
        asset_out: AssetId,
    ) -> Result<Amount> {
        let pool = self.tradeable_pool(asset_in, asset_out)?;
        let (reserve_in, reserve_out) = pool.reserves_for(&asset_in)?;
        get_amount_out(amount_in, reserve_in, reserve_out, self.config.fee_tier())
    }

    /// The seeded pool for the pair.
    fn tradeable_pool(&self, asset_in: AssetId, asset_out: AssetId) -> Result<&Pool> {
        let pair = PairKey::resolve(asset_in, asset_out)?;
        match self.registry.get(&pair.key()) {
            Some(pool) if !pool.is_empty() => Ok(pool),
            _ => Err(AmmError::InsufficientLiquidity),
        }
    }

    /// Settles a staged swap, commits it and notifies.
    fn settle(&mut self, caller: AccountId, update: PoolUpdate, fill: &Fill) -> Result<()> {
        let mut settlement = Settlement::new(&mut self.transfers);
        settlement.pull(fill.asset_in, caller, fill.amount_in)?;
        settlement.push(fill.asset_out, fill.recipient, fill.amount_out)?;
        settlement.finish();

        let key = update.key();
        self.registry.commit(update);

        info!(
            pair = %key,
            account = %caller,
            recipient = %fill.recipient,
            asset_in = %fill.asset_in,
            asset_out = %fill.asset_out,
            amount_in = %fill.amount_in,
            amount_out = %fill.amount_out,
            "swap executed"
        );
        self.events.emit(AmmEvent::Swap {
            account: caller,
            recipient: fill.recipient,
            asset_in: fill.asset_in,
            asset_out: fill.asset_out,
            amount_in: fill.amount_in,
            amount_out: fill.amount_out,
        });
        Ok(())
    }
}

/// Applies a priced swap to a draft of `pool`, rejecting any fill that
/// would shrink `k`.
fn stage_swap(pool: &Pool, fill: &Fill) -> Result<PoolUpdate> {
    let mut draft = PoolDraft::of(pool);
    let k_before = draft.k();
    draft.apply_swap(&fill.asset_in, fill.amount_in, fill.amount_out)?;
    if draft.k() < k_before {
        warn!(pair = %draft.key(), "swap would decrease k");
        return Err(AmmError::KInvariantViolation);
    }
    Ok(draft.into_update())
}
