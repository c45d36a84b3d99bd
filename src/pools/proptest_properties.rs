//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 2. **k monotonicity**: `reserve_x · reserve_y` never decreases across swaps.
//! 3. **Initial mint**: first deposit mints `√(a·b) − MINIMUM_LIQUIDITY`.
//! 4. **Ratio preservation**: later deposits match the reserve ratio to
//!    within one unit.
//! 5. **Proportional withdrawal**: payouts are `shares·reserve / T`.
//! 6. **Liquidity round-trip**: deposit then withdraw returns ≤ deposit.
//! 7. **Order independence**: pair keys and reserve views ignore argument
//!    order.
//! 8. **Ledger consistency**: holder balances always sum to the supply.
//! 9. **Token-scale magnitudes**: properties 1 to 3 plus exact-output
//!    pricing, with 18-decimal reserves whose products exceed `u128`.

use proptest::prelude::*;

use crate::config::DEFAULT_MINIMUM_LIQUIDITY;
use crate::domain::{AccountId, Amount, AssetId, FeeTier, PairKey, Shares, Timestamp};
use crate::engine::{
    get_amount_in, AddLiquidity, Amm, RemoveLiquidity, SwapExactIn, SwapExactOut,
};
use crate::error::AmmError;
use crate::ledger::InMemoryLedger;
use crate::math::{isqrt, widening_mul};
use crate::traits::{ManualClock, NoopSink};

type PropAmm = Amm<InMemoryLedger, ManualClock, NoopSink>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const DEADLINE: Timestamp = Timestamp::from_secs(u64::MAX);
const FUNDING: u128 = 1_000_000_000_000;
const WHOLE: u128 = 1_000_000_000_000_000_000;
const DEEP_FUNDING: u128 = 1_000_000_000_000 * WHOLE;

fn tka() -> AssetId {
    AssetId::from_bytes([0x11; 32])
}

fn tkb() -> AssetId {
    AssetId::from_bytes([0x22; 32])
}

fn lp() -> AccountId {
    AccountId::from_bytes([0xA1; 32])
}

fn trader() -> AccountId {
    AccountId::from_bytes([0xB0; 32])
}

fn fresh_amm() -> PropAmm {
    funded_amm(FUNDING)
}

fn funded_amm(funding: u128) -> PropAmm {
    let mut ledger = InMemoryLedger::new();
    for account in [lp(), trader()] {
        for asset in [tka(), tkb()] {
            let Ok(()) = ledger.mint(asset, account, Amount::new(funding)) else {
                panic!("mint");
            };
        }
    }
    Amm::new(ledger, ManualClock::new(Timestamp::from_secs(0)), NoopSink)
}

fn deposit(a: u128, b: u128) -> AddLiquidity {
    AddLiquidity {
        asset_a: tka(),
        asset_b: tkb(),
        desired_a: Amount::new(a),
        desired_b: Amount::new(b),
        min_a: Amount::ZERO,
        min_b: Amount::ZERO,
        recipient: lp(),
        deadline: DEADLINE,
    }
}

fn sell(asset_in: AssetId, asset_out: AssetId, amount: u128) -> SwapExactIn {
    SwapExactIn {
        amount_in: Amount::new(amount),
        amount_out_min: Amount::ZERO,
        asset_in,
        asset_out,
        recipient: trader(),
        deadline: DEADLINE,
    }
}

fn withdraw(shares: Shares, recipient: AccountId) -> RemoveLiquidity {
    RemoveLiquidity {
        asset_a: tka(),
        asset_b: tkb(),
        shares,
        min_a: Amount::ZERO,
        min_b: Amount::ZERO,
        recipient,
        deadline: DEADLINE,
    }
}

fn seeded(ra: u128, rb: u128) -> PropAmm {
    seed(fresh_amm(), ra, rb)
}

fn seeded_deep(ra: u128, rb: u128) -> PropAmm {
    seed(funded_amm(DEEP_FUNDING), ra, rb)
}

fn seed(mut amm: PropAmm, ra: u128, rb: u128) -> PropAmm {
    let Ok(_) = amm.add_liquidity(lp(), deposit(ra, rb)) else {
        panic!("seed deposit");
    };
    amm
}

fn reserves(amm: &PropAmm) -> (u128, u128) {
    let Ok((a, b)) = amm.get_reserves(tka(), tkb()) else {
        panic!("distinct assets");
    };
    (a.get(), b.get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Trade sizes from dust up to about a third of a deep reserve.
fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=3_000_000u128
}

/// 18-decimal reserves from one whole token up to a billion.
fn deep_reserve_strategy() -> impl Strategy<Value = u128> {
    WHOLE..=1_000_000_000 * WHOLE
}

/// 18-decimal trades from one base unit up to ten million whole tokens.
fn deep_trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=10_000_000 * WHOLE
}

/// Arbitrary 32-byte asset identifiers.
fn asset_strategy() -> impl Strategy<Value = AssetId> {
    any::<[u8; 32]>().prop_map(AssetId::from_bytes)
}

// ---------------------------------------------------------------------------
// Property 1: Swap Reversibility
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in trade_strategy(),
    ) {
        let mut amm = seeded(ra, rb);

        let Ok(received_b) = amm.swap_exact(trader(), sell(tka(), tkb(), amount)) else {
            return Ok(());
        };
        let Ok(final_a) = amm.swap_exact(trader(), sell(tkb(), tka(), received_b.get())) else {
            return Ok(());
        };

        prop_assert!(
            final_a.get() <= amount,
            "round-trip should lose value: final={} > original={}",
            final_a, amount
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: k Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_k_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        trades in prop::collection::vec((trade_strategy(), any::<bool>()), 1..8),
    ) {
        let mut amm = seeded(ra, rb);
        for (amount, a_to_b) in trades {
            let (x0, y0) = reserves(&amm);
            let request = if a_to_b {
                sell(tka(), tkb(), amount)
            } else {
                sell(tkb(), tka(), amount)
            };
            if amm.swap_exact(trader(), request).is_err() {
                continue;
            }
            let (x1, y1) = reserves(&amm);
            prop_assert!(widening_mul(x1, y1) >= widening_mul(x0, y0), "k decreased");
            prop_assert!(x1 > 0 && y1 > 0);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Initial Mint
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_initial_mint_is_geometric_mean(
        a in reserve_strategy(),
        b in reserve_strategy(),
    ) {
        let mut amm = fresh_amm();
        let Ok((used_a, used_b, minted)) = amm.add_liquidity(lp(), deposit(a, b)) else {
            return Err(TestCaseError::fail("seed deposit failed"));
        };
        prop_assert_eq!((used_a.get(), used_b.get()), (a, b));
        let root = isqrt(widening_mul(a, b));
        prop_assert_eq!(minted.get(), root - DEFAULT_MINIMUM_LIQUIDITY.get());
        prop_assert_eq!(
            amm.share_balance(tka(), tkb(), AccountId::BURN),
            Ok(DEFAULT_MINIMUM_LIQUIDITY)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 4: Ratio Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_preserves_ratio(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in reserve_strategy(),
        db in reserve_strategy(),
    ) {
        let mut amm = seeded(ra, rb);
        let Ok((used_a, used_b, _)) = amm.add_liquidity(trader(), deposit(da, db)) else {
            return Ok(());
        };
        let (used_a, used_b) = (used_a.get(), used_b.get());
        prop_assert!(used_a <= da && used_b <= db);
        prop_assert!(used_a == da || used_b == db, "only one side may be trimmed");

        // used_a / used_b matches ra / rb up to one unit of either asset
        let lhs = used_a * rb;
        let rhs = used_b * ra;
        prop_assert!(lhs.abs_diff(rhs) < ra.max(rb));
    }
}

// ---------------------------------------------------------------------------
// Property 5: Proportional Withdrawal
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_withdrawal_is_pro_rata(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fraction in 1u128..=100u128,
    ) {
        let mut amm = seeded(ra, rb);
        let Ok(owned) = amm.share_balance(tka(), tkb(), lp()) else {
            return Err(TestCaseError::fail("distinct assets"));
        };
        let Ok(total_before) = amm.total_shares(tka(), tkb()) else {
            return Err(TestCaseError::fail("distinct assets"));
        };
        let shares = Shares::new((owned.get() * fraction / 100).max(1));

        let Ok((a, b)) = amm.remove_liquidity(lp(), withdraw(shares, lp())) else {
            return Ok(());
        };
        let t = total_before.get();
        prop_assert_eq!(a.get(), shares.get() * ra / t);
        prop_assert_eq!(b.get(), shares.get() * rb / t);
        prop_assert_eq!(
            amm.total_shares(tka(), tkb()),
            Ok(Shares::new(t - shares.get()))
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Liquidity Round-Trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_withdraw_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in reserve_strategy(),
        db in reserve_strategy(),
    ) {
        let mut amm = seeded(ra, rb);
        let mut request = deposit(da, db);
        request.recipient = trader();
        let Ok((used_a, used_b, minted)) = amm.add_liquidity(trader(), request) else {
            return Ok(());
        };
        let Ok((back_a, back_b)) = amm.remove_liquidity(trader(), withdraw(minted, trader())) else {
            return Ok(());
        };
        prop_assert!(back_a <= used_a, "a: {} > {}", back_a, used_a);
        prop_assert!(back_b <= used_b, "b: {} > {}", back_b, used_b);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Order Independence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pair_key_order_independent(
        x in asset_strategy(),
        y in asset_strategy(),
    ) {
        prop_assume!(x != y);
        let (Ok(xy), Ok(yx)) = (PairKey::resolve(x, y), PairKey::resolve(y, x)) else {
            return Err(TestCaseError::fail("distinct assets must resolve"));
        };
        prop_assert_eq!(xy, yx);
        prop_assert!(xy.asset_x() < xy.asset_y());
    }

    #[test]
    fn prop_reserves_transpose(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let amm = seeded(ra, rb);
        let (Ok(ab), Ok(ba)) = (amm.get_reserves(tka(), tkb()), amm.get_reserves(tkb(), tka())) else {
            return Err(TestCaseError::fail("distinct assets"));
        };
        prop_assert_eq!(ab, (Amount::new(ra), Amount::new(rb)));
        prop_assert_eq!(ba, (ab.1, ab.0));
    }
}

// ---------------------------------------------------------------------------
// Property 8: Ledger Consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_pool_stays_consistent(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec((0u8..3, trade_strategy()), 1..12),
    ) {
        let mut amm = seeded(ra, rb);
        for (op, amount) in ops {
            // Failed operations must leave the pool untouched, so their
            // errors are irrelevant here.
            let _ = match op {
                0 => amm.swap_exact(trader(), sell(tka(), tkb(), amount)).map(|_| ()),
                1 => {
                    let mut request = deposit(amount, amount);
                    request.recipient = trader();
                    amm.add_liquidity(trader(), request).map(|_| ())
                }
                _ => {
                    let held = amm.share_balance(tka(), tkb(), trader()).unwrap_or_default();
                    let shares = Shares::new(held.get().min(amount));
                    amm.remove_liquidity(trader(), withdraw(shares, trader())).map(|_| ())
                }
            };
            let Ok(Some(pool)) = amm.pool(tka(), tkb()) else {
                return Err(TestCaseError::fail("pool must exist"));
            };
            prop_assert!(pool.is_consistent());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 9: Token-Scale Magnitudes
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deep_initial_mint_is_geometric_mean(
        a in deep_reserve_strategy(),
        b in deep_reserve_strategy(),
    ) {
        let mut amm = funded_amm(DEEP_FUNDING);
        let Ok((_, _, minted)) = amm.add_liquidity(lp(), deposit(a, b)) else {
            return Err(TestCaseError::fail("seed deposit failed"));
        };
        let root = isqrt(widening_mul(a, b));
        prop_assert_eq!(minted.get(), root - DEFAULT_MINIMUM_LIQUIDITY.get());
        prop_assert!(widening_mul(root, root) <= widening_mul(a, b));
    }

    #[test]
    fn prop_deep_k_never_decreases(
        ra in deep_reserve_strategy(),
        rb in deep_reserve_strategy(),
        trades in prop::collection::vec((deep_trade_strategy(), any::<bool>()), 1..8),
    ) {
        let mut amm = seeded_deep(ra, rb);
        for (amount, a_to_b) in trades {
            let (x0, y0) = reserves(&amm);
            let request = if a_to_b {
                sell(tka(), tkb(), amount)
            } else {
                sell(tkb(), tka(), amount)
            };
            if let Err(err) = amm.swap_exact(trader(), request) {
                // only dust may fail to price at this scale
                prop_assert!(
                    !matches!(err, AmmError::Overflow(_)),
                    "overflow at reserves ({}, {}): {}", x0, y0, err
                );
                continue;
            }
            let (x1, y1) = reserves(&amm);
            prop_assert!(widening_mul(x1, y1) >= widening_mul(x0, y0), "k decreased");
        }
    }

    #[test]
    fn prop_deep_exact_out_is_minimal(
        ra in deep_reserve_strategy(),
        rb in deep_reserve_strategy(),
        fraction in 1u128..=5_000u128,
    ) {
        let mut amm = seeded_deep(ra, rb);
        // up to half of the output reserve, in ten-thousandths
        let wanted = (rb / 10_000 * fraction).max(1);
        let Ok(quoted) = get_amount_in(
            Amount::new(wanted),
            Amount::new(ra),
            Amount::new(rb),
            FeeTier::TIER_0_30_PERCENT,
        ) else {
            return Err(TestCaseError::fail("exact-out pricing failed"));
        };
        let request = SwapExactOut {
            amount_out: Amount::new(wanted),
            amount_in_max: quoted,
            asset_in: tka(),
            asset_out: tkb(),
            recipient: trader(),
            deadline: DEADLINE,
        };
        let Ok(paid) = amm.swap_for_exact(trader(), request) else {
            return Err(TestCaseError::fail("exact-out swap failed"));
        };
        prop_assert_eq!(paid, quoted);
        let (x1, y1) = reserves(&amm);
        prop_assert_eq!((x1, y1), (ra + paid.get(), rb - wanted));
        prop_assert!(widening_mul(x1, y1) >= widening_mul(ra, rb));
    }

    #[test]
    fn prop_deep_swap_reversibility(
        ra in deep_reserve_strategy(),
        rb in deep_reserve_strategy(),
        amount in deep_trade_strategy(),
    ) {
        let mut amm = seeded_deep(ra, rb);
        let Ok(received_b) = amm.swap_exact(trader(), sell(tka(), tkb(), amount)) else {
            return Ok(());
        };
        let Ok(final_a) = amm.swap_exact(trader(), sell(tkb(), tka(), received_b.get())) else {
            return Ok(());
        };
        prop_assert!(final_a.get() <= amount);
    }
}
