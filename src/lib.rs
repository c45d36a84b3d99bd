//! # pairswap
//!
//! Constant-product automated market maker core: canonical pair pools,
//! liquidity shares with a permanently locked minimum, fee-bearing swaps
//! with slippage bounds and deadlines, and spot-price queries.
//!
//! The crate keeps only the pools' own accounting. Moving the traded
//! assets, telling time and receiving notifications are delegated to
//! collaborators behind the [`TokenTransfer`](traits::TokenTransfer),
//! [`Clock`](traits::Clock) and [`EventSink`](traits::EventSink) traits.
//!
//! ## Seed a pool and trade against it
//!
//! ```rust
//! use pairswap::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let alice = AccountId::from_bytes([0xA1; 32]);
//!
//! let mut ledger = InMemoryLedger::new();
//! ledger.mint(usdc, alice, Amount::new(1_000_000)).expect("mint");
//! ledger.mint(weth, alice, Amount::new(1_000_000)).expect("mint");
//!
//! let mut amm = Amm::new(ledger, SystemClock, NoopSink);
//! let deadline = SystemClock.now().saturating_add_secs(60);
//!
//! // 1. First deposit: sqrt(1000 · 4000) = 2000 shares, 1000 locked.
//! let (_, _, shares) = amm
//!     .add_liquidity(alice, AddLiquidity {
//!         asset_a: usdc,
//!         asset_b: weth,
//!         desired_a: Amount::new(1_000),
//!         desired_b: Amount::new(4_000),
//!         min_a: Amount::ZERO,
//!         min_b: Amount::ZERO,
//!         recipient: alice,
//!         deadline,
//!     })
//!     .expect("deposit");
//! assert_eq!(shares, Shares::new(1_000));
//!
//! // 2. Sell 100 usdc at 0.30%.
//! let out = amm
//!     .swap_exact(alice, SwapExactIn {
//!         amount_in: Amount::new(100),
//!         amount_out_min: Amount::new(350),
//!         asset_in: usdc,
//!         asset_out: weth,
//!         recipient: alice,
//!         deadline,
//!     })
//!     .expect("swap");
//! assert_eq!(out, Amount::new(362));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller    │  AddLiquidity / RemoveLiquidity / SwapExactIn / SwapExactOut
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │  engine::Amm │  deadline + pair checks, pricing on a staged pool
//! └──────┬───────┘
//!        │ Settlement (compensating transfer legs)
//!        ▼
//! ┌──────────────┐     ┌──────────────────────────┐
//! │ PoolRegistry │     │ TokenTransfer / EventSink │
//! └──────┬───────┘     └──────────────────────────┘
//!        ▼
//! ┌──────────────┐
//! │    Domain    │  Amount, Shares, AssetId, PairKey, FeeTier, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`PairKey`](domain::PairKey), etc. |
//! | [`math`] | Checked arithmetic, full-width `mul_div`, integer square root |
//! | [`config`] | [`AmmConfig`](config::AmmConfig): fee tier, minimum liquidity, price scale |
//! | [`traits`] | Collaborator seams: [`TokenTransfer`](traits::TokenTransfer), [`Clock`](traits::Clock), [`EventSink`](traits::EventSink) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger), a reference transfer layer |
//! | [`events`] | [`AmmEvent`](events::AmmEvent) notifications |
//! | [`pools`] | [`Pool`](pools::Pool), [`PoolRegistry`](pools::PoolRegistry), [`Settlement`](pools::Settlement) |
//! | [`engine`] | [`Amm`](engine::Amm) and the pure pricing functions |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod events;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
