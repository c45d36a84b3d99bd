//! Seams to the collaborators the core depends on but does not implement.
//!
//! - [`TokenTransfer`] moves assets in and out of pool custody.
//! - [`Clock`] supplies the time that deadlines are checked against.
//! - [`EventSink`] receives notifications of committed operations.
//!
//! The [`Amm`](crate::engine::Amm) engine is generic over all three, so
//! dispatch is static and tests can substitute deterministic doubles.

mod clock;
mod event_sink;
mod token_transfer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use event_sink::{EventSink, NoopSink, RecordingSink};
pub use token_transfer::{TokenTransfer, TransferError};
