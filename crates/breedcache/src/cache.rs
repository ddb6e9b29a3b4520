//! CachingBreedFetcher: memoizing wrapper around any BreedFetcher

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ahash::RandomState;
use dogbreeds::{BreedFetcher, Result};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::stats::CacheStats;

/// Cache key for a raw breed name: surrounding whitespace trimmed, lower-cased.
///
/// Case folding is Unicode-based and independent of the process locale.
pub fn normalize_breed(breed: &str) -> String {
    breed.trim().to_lowercase()
}

/// Caching layer combining an in-memory map with a [`BreedFetcher`] backend.
///
/// Successful lookups are stored for the life of the instance. Failures are
/// never stored: each failed lookup is forwarded again next time. Every
/// forwarded lookup counts towards [`calls_made`](Self::calls_made).
///
/// The map lock is not held while the wrapped fetcher runs, so two threads
/// missing on the same breed may both forward. The first stored list wins
/// and both calls are counted.
pub struct CachingBreedFetcher<F> {
    /// Wrapped source
    fetcher: F,

    /// Normalized breed name -> sub-breeds
    cache: RwLock<HashMap<String, Vec<String>, RandomState>>,

    /// Cache statistics
    stats: CacheStats,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wrap `fetcher` with an empty cache and zeroed counters
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(HashMap::with_hasher(RandomState::new())),
            stats: CacheStats::new(),
        }
    }

    /// Get sub-breeds from cache or from the wrapped fetcher
    ///
    /// # Arguments
    /// * `breed` - Breed name; case and surrounding whitespace are ignored
    ///   for caching, but the wrapped fetcher receives it unchanged
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - A copy of the sub-breed list, or the
    ///   wrapped fetcher's error as-is
    pub fn lookup(&self, breed: &str) -> Result<Vec<String>> {
        let key = normalize_breed(breed);

        // Try cache first
        if let Some(subs) = self.cache.read().get(&key) {
            self.stats.record_hit();
            trace!(breed = %key, "cache hit");
            return Ok(subs.clone());
        }

        // Cache miss - forward, counted whether or not it succeeds
        self.stats.record_miss();
        debug!(breed = %key, calls = self.stats.misses(), "cache miss, forwarding");

        let subs = match self.fetcher.sub_breeds(breed) {
            Ok(subs) => subs,
            Err(e) => {
                self.stats.record_failure();
                debug!(breed = %key, error = %e, "lookup failed, not cached");
                return Err(e);
            }
        };

        let mut cache = self.cache.write();
        let stored = match cache.entry(key) {
            // Another thread stored it while we were fetching
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                debug!(breed = %entry.key(), count = subs.len(), "caching sub-breeds");
                self.stats.record_insert();
                entry.insert(subs).clone()
            }
        };

        Ok(stored)
    }

    /// Number of lookups forwarded to the wrapped fetcher
    pub fn calls_made(&self) -> u64 {
        self.stats.misses()
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Check whether a breed is cached, without counting a hit or miss
    pub fn contains(&self, breed: &str) -> bool {
        self.cache.read().contains_key(&normalize_breed(breed))
    }

    /// Number of cached breeds
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    /// Borrow the wrapped fetcher
    pub fn inner(&self) -> &F {
        &self.fetcher
    }

    /// Drop the cache and return the wrapped fetcher
    pub fn into_inner(self) -> F {
        self.fetcher
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        self.lookup(breed)
    }
}
