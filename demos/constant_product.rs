//! Constant-product AMM walkthrough.
//!
//! Seeds a pool with a first deposit, trades against it in both swap
//! modes, adds and withdraws liquidity, and shows a failed transfer being
//! rolled back. Set `RUST_LOG=pairswap=debug` to see the engine's
//! structured logs.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product
//! ```

use pairswap::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Constant Product AMM (x · y = k) ===\n");

    // ── 1. Assets, accounts and a funded ledger ─────────────────────────
    let usdc = AssetId::from_bytes([0x11; 32]);
    let weth = AssetId::from_bytes([0x22; 32]);
    let alice = AccountId::from_bytes([0xA1; 32]);
    let bob = AccountId::from_bytes([0xB0; 32]);

    let mut ledger = InMemoryLedger::new();
    for account in [alice, bob] {
        ledger.mint(usdc, account, Amount::new(1_000_000))?;
        ledger.mint(weth, account, Amount::new(1_000_000))?;
    }

    let clock = ManualClock::new(Timestamp::from_secs(1_700_000_000));
    let deadline = clock.now().saturating_add_secs(120);
    let mut amm = Amm::new(ledger, clock, RecordingSink::new());
    println!("Fee tier: {} bps", amm.config().fee_tier().basis_points().get());

    // ── 2. First deposit creates the pool ───────────────────────────────
    let (used_a, used_b, minted) = amm.add_liquidity(
        alice,
        AddLiquidity {
            asset_a: usdc,
            asset_b: weth,
            desired_a: Amount::new(1_000),
            desired_b: Amount::new(4_000),
            min_a: Amount::ZERO,
            min_b: Amount::ZERO,
            recipient: alice,
            deadline,
        },
    )?;
    println!("\n--- Seed deposit ---");
    println!("  Deposited:     {used_a} USDC + {used_b} WETH");
    println!("  Shares minted: {minted}");
    println!(
        "  Locked shares: {}",
        amm.share_balance(usdc, weth, AccountId::BURN)?
    );
    println!("  Spot price:    {} (WETH per USDC, 1e18 scale)", amm.get_price(usdc, weth)?);

    // ── 3. Exact-input swap ─────────────────────────────────────────────
    let out = amm.swap_exact(
        bob,
        SwapExactIn {
            amount_in: Amount::new(100),
            amount_out_min: Amount::new(350),
            asset_in: usdc,
            asset_out: weth,
            recipient: bob,
            deadline,
        },
    )?;
    let (ra, rb) = amm.get_reserves(usdc, weth)?;
    println!("\n--- Swap: sell 100 USDC ---");
    println!("  Received:      {out} WETH");
    println!("  Reserves:      ({ra}, {rb})");
    println!("  Spot price:    {}", amm.get_price(usdc, weth)?);

    // ── 4. Exact-output swap ────────────────────────────────────────────
    let paid = amm.swap_for_exact(
        bob,
        SwapExactOut {
            amount_out: Amount::new(50),
            amount_in_max: Amount::new(250),
            asset_in: weth,
            asset_out: usdc,
            recipient: bob,
            deadline,
        },
    )?;
    println!("\n--- Swap: buy 50 USDC ---");
    println!("  Paid:          {paid} WETH");

    // ── 5. A second provider joins at the current ratio ─────────────────
    let (bob_a, bob_b, bob_shares) = amm.add_liquidity(
        bob,
        AddLiquidity {
            asset_a: weth,
            asset_b: usdc,
            desired_a: Amount::new(10_000),
            desired_b: Amount::new(500),
            min_a: Amount::ZERO,
            min_b: Amount::ZERO,
            recipient: bob,
            deadline,
        },
    )?;
    println!("\n--- Bob adds liquidity (WETH, USDC order) ---");
    println!("  Deposited:     {bob_a} WETH + {bob_b} USDC");
    println!("  Shares minted: {bob_shares}");

    // ── 6. A refused transfer leaves everything untouched ───────────────
    amm.transfers_mut().freeze_asset(usdc);
    let before = amm.get_reserves(usdc, weth)?;
    let failed = amm.swap_exact(
        bob,
        SwapExactIn {
            amount_in: Amount::new(400),
            amount_out_min: Amount::ZERO,
            asset_in: weth,
            asset_out: usdc,
            recipient: bob,
            deadline,
        },
    );
    amm.transfers_mut().unfreeze_asset(usdc);
    println!("\n--- Swap while USDC transfers are frozen ---");
    println!("  Result:        {failed:?}");
    println!("  Reserves kept: {}", before == amm.get_reserves(usdc, weth)?);

    // ── 7. Alice withdraws everything she owns ──────────────────────────
    let shares = amm.share_balance(usdc, weth, alice)?;
    let (back_a, back_b) = amm.remove_liquidity(
        alice,
        RemoveLiquidity {
            asset_a: usdc,
            asset_b: weth,
            shares,
            min_a: Amount::ZERO,
            min_b: Amount::ZERO,
            recipient: alice,
            deadline,
        },
    )?;
    println!("\n--- Alice withdraws {shares} shares ---");
    println!("  Received:      {back_a} USDC + {back_b} WETH");
    println!("  Total shares:  {}", amm.total_shares(usdc, weth)?);

    // ── 8. Event log ────────────────────────────────────────────────────
    println!("\n--- Events ---");
    for event in amm.events().events() {
        println!("  {}", serde_json::to_string(event)?);
    }

    println!("\n=== Done ===");
    Ok(())
}
