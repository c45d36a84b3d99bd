//! Ownership of every pool, keyed by pair.

use std::collections::HashMap;

use crate::domain::{PairKey, ResolvedPair};

use super::draft::{PoolDraft, PoolUpdate};
use super::Pool;

/// Owns all pools, one per [`PairKey`].
///
/// Pools change only by [`commit`](Self::commit): the engine works on a
/// draft obtained from [`stage`](Self::stage) and commits its update once
/// every transfer leg has settled. A pool whose first deposit fails is
/// therefore never inserted, and pools are never removed.
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: HashMap<PairKey, Pool>,
}

impl PoolRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pool for `key`, if one has been created.
    #[must_use]
    pub fn get(&self, key: &PairKey) -> Option<&Pool> {
        self.pools.get(key)
    }

    /// Returns `true` if a pool exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &PairKey) -> bool {
        self.pools.contains_key(key)
    }

    /// Number of pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// Returns `true` if no pool has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterates over all pools in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Pool> + '_ {
        self.pools.values()
    }

    /// Returns a draft of the pool for `pair`, or of a new empty pool if
    /// none exists yet.
    pub(crate) fn stage(&self, pair: &ResolvedPair) -> PoolDraft<'_> {
        match self.pools.get(&pair.key()) {
            Some(pool) => PoolDraft::of(pool),
            None => PoolDraft::fresh(*pair),
        }
    }

    /// Applies a settled update, inserting the pool on its first commit.
    pub(crate) fn commit(&mut self, update: PoolUpdate) {
        let pair = update.pair;
        self.pools
            .entry(pair.key())
            .or_insert_with(|| Pool::new(pair))
            .apply(update);
    }
}
