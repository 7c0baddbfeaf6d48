//! Memoization of resolved bindings.

use dashmap::DashMap;
use genbind_common::DefId;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{trace, warn};

/// One resolution request: parameter `param_index` of `ancestor`, as bound by `subtype`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolutionKey {
    pub subtype: DefId,
    pub ancestor: DefId,
    pub param_index: usize,
}

impl ResolutionKey {
    pub const fn new(subtype: DefId, ancestor: DefId, param_index: usize) -> Self {
        Self {
            subtype,
            ancestor,
            param_index,
        }
    }
}

/// Hit/miss counters of a [`ResolutionCache`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Unbounded, grow-only cache of successful resolutions.
///
/// Lookups and inserts are safe from any number of threads. The compute step
/// runs without holding a shard lock, so two threads missing the same key may
/// both compute; the first insert wins and both return the stored value.
/// Failed computations are not recorded.
#[derive(Default)]
pub struct ResolutionCache {
    entries: DashMap<ResolutionKey, DefId>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or run `compute` and store its result.
    pub fn get_or_compute<E>(
        &self,
        key: ResolutionKey,
        compute: impl FnOnce() -> Result<DefId, E>,
    ) -> Result<DefId, E> {
        if let Some(hit) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(?key, resolved = %hit.0, "ResolutionCache hit");
            return Ok(*hit);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed = compute()?;
        let stored = *self.entries.entry(key).or_insert(computed);
        if stored != computed {
            // Metadata views are required to be pure, so this only fires on a broken view.
            warn!(
                ?key,
                stored = %stored.0,
                computed = %computed.0,
                "ResolutionCache: racing computation disagreed with stored value"
            );
        }
        Ok(stored)
    }

    /// Cached value for `key`, without computing or counting.
    pub fn get(&self, key: &ResolutionKey) -> Option<DefId> {
        self.entries.get(key).map(|r| *r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/cache_tests.rs"]
mod tests;
