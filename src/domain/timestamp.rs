//! Clock readings and caller deadlines.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A point in time, in whole seconds since the Unix epoch.
///
/// Used both for clock readings and for the caller-supplied `deadline`
/// of every mutating operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The latest representable time; a deadline that never expires.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a timestamp from seconds since the epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns seconds since the epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `self + secs`, saturating at [`Timestamp::MAX`].
    #[must_use]
    pub const fn saturating_add_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }

    /// Returns `true` if `now` is past this deadline.
    ///
    /// A deadline equal to `now` is still valid.
    #[must_use]
    pub const fn has_expired(&self, now: Self) -> bool {
        now.0 > self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
