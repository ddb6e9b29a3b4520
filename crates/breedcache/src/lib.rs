//! # breedcache
//!
//! Memoizing layer for sub-breed lookups.
//!
//! ## Architecture
//! - **HashMap**: AHash keyed by trimmed, lower-cased breed name
//! - **RwLock**: concurrent hits, exclusive insert-if-absent on store
//! - **Integration**: wraps any `BreedFetcher` and is one itself
//!
//! Only successful lookups are stored. A failed lookup leaves the cache
//! untouched, so the next attempt goes back to the wrapped source.

#![warn(missing_docs)]

mod cache;
mod stats;

pub use cache::{normalize_breed, CachingBreedFetcher};
pub use stats::CacheStats;
