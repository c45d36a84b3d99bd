//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pairswap::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, BasisPoints, FeeTier, PairKey, ResolvedPair, Shares, Timestamp,
};

pub use crate::traits::{
    Clock, EventSink, ManualClock, NoopSink, RecordingSink, SystemClock, TokenTransfer,
    TransferError,
};

pub use crate::math::{CheckedArithmetic, Rounding};

pub use crate::config::AmmConfig;

pub use crate::engine::{
    get_amount_in, get_amount_out, quote, AddLiquidity, Amm, RemoveLiquidity, SwapExactIn,
    SwapExactOut,
};

pub use crate::events::AmmEvent;
pub use crate::ledger::InMemoryLedger;
pub use crate::pools::{Pool, PoolRegistry};

pub use crate::error::{AmmError, Result};
