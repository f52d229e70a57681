//! Memoized bases, indexed by conductor.
//!
//! Bases are pure functions of the conductor, so they are computed once and
//! then shared. Lookups take a read lock; only a miss takes the write lock,
//! and an entry that is already published is never replaced.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::top_digit::Basis;

/// A cache of cyclotomic bases.
#[derive(Debug, Default)]
pub struct BasisCache {
    entries: RwLock<FxHashMap<usize, Arc<Basis>>>,
}

impl BasisCache {
    /// Creates a new empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`basis`].
    pub fn global() -> &'static BasisCache {
        static GLOBAL: OnceLock<BasisCache> = OnceLock::new();
        GLOBAL.get_or_init(BasisCache::new)
    }

    /// Returns the basis for conductor `n`, computing it on first use.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn get(&self, n: usize) -> Arc<Basis> {
        if let Some(basis) = self.entries.read().get(&n) {
            return Arc::clone(basis);
        }

        // Computed outside the lock; a concurrent miss may duplicate the
        // work, but the first inserted entry wins.
        let computed = Arc::new(Basis::new(n));
        trace!(conductor = n, dimension = computed.len(), "computed cyclotomic basis");

        let mut entries = self.entries.write();
        Arc::clone(entries.entry(n).or_insert(computed))
    }

    /// Returns true if the basis for `n` has been computed.
    pub fn contains(&self, n: usize) -> bool {
        self.entries.read().contains_key(&n)
    }

    /// Returns the number of cached bases.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Returns the basis for conductor `n` from the process-wide cache.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn basis(n: usize) -> Arc<Basis> {
    BasisCache::global().get(n)
}
