//! Lookup handler: runs breed names through the cache

use breedcache::CachingBreedFetcher;
use dogbreeds::BreedFetcher;

use crate::reply::{Reply, StatsReply};

pub struct LookupHandler<F> {
    cache: CachingBreedFetcher<F>,
}

impl<F: BreedFetcher> LookupHandler<F> {
    pub fn new(source: F) -> Self {
        Self {
            cache: CachingBreedFetcher::new(source),
        }
    }

    pub fn handle(&self, breed: &str) -> Reply {
        let label = breed.trim();
        match self.cache.lookup(breed) {
            Ok(sub_breeds) => Reply::Found {
                breed: label.to_string(),
                sub_breeds,
            },
            Err(e) => Reply::NotFound {
                breed: label.to_string(),
                error: e.message().to_string(),
            },
        }
    }

    pub fn stats(&self) -> StatsReply {
        let stats = self.cache.stats();
        StatsReply {
            calls_made: self.cache.calls_made(),
            hits: stats.hits(),
            failures: stats.failures(),
            cached_breeds: self.cache.len(),
            hit_ratio: stats.hit_ratio(),
        }
    }
}
