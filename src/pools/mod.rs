//! Pool state and its custody.
//!
//! | Type | Role |
//! |------|------|
//! | [`Pool`] | Reserves and liquidity-share ledger of one pair |
//! | [`PoolRegistry`] | Owns every pool, keyed by [`PairKey`](crate::domain::PairKey) |
//! | [`Settlement`] | Runs an operation's transfer legs all-or-nothing |
//!
//! Operations stage their changes in a crate-private draft that copies
//! only reserves, supply and the holder balances they touch.

mod draft;
mod pool;
mod registry;
mod settlement;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use pool::Pool;
pub use registry::PoolRegistry;
pub use settlement::Settlement;

pub(crate) use draft::{PoolDraft, PoolUpdate};
