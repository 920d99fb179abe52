//! Memo of parsed queries.
//!
//! The parser is a pure function of the normalized query text, so its output
//! can be reused until it ages out. Matching records are never memoized; they
//! are always computed from the current store contents.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use sift::FilterSet;

use crate::config::CacheConfig;

/// Bounded, time-limited map from query text to the filter set it parsed to.
///
/// Lookups and inserts take the raw query; equivalent spellings (case,
/// whitespace runs) share one slot.
pub struct FilterCache {
    parsed: Mutex<LruCache<String, (FilterSet, Instant)>>,
    ttl: Duration,
}

impl FilterCache {
    /// Creates an empty cache. A capacity of zero is treated as one.
    pub fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            parsed: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
        }
    }

    /// Returns the filters previously stored for `query`, if still fresh.
    pub fn lookup(&self, query: &str) -> Option<FilterSet> {
        let key = query_key(query);
        let mut parsed = self.parsed.lock();
        let (filters, stored) = parsed.get(&key)?;
        if stored.elapsed() <= self.ttl {
            return Some(filters.clone());
        }
        parsed.pop(&key);
        None
    }

    /// Records the filters `query` parsed to.
    pub fn remember(&self, query: &str, filters: &FilterSet) {
        self.parsed
            .lock()
            .put(query_key(query), (filters.clone(), Instant::now()));
    }

    /// Number of stored queries, stale ones included.
    pub fn len(&self) -> usize {
        self.parsed.lock().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets every stored query.
    pub fn clear(&self) {
        self.parsed.lock().clear();
    }
}

/// Lower-cased query with whitespace runs collapsed to one space.
fn query_key(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
