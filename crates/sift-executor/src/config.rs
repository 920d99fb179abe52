//! Executor settings.

use std::time::Duration;

/// How a [`QueryExecutor`](crate::QueryExecutor) runs queries.
///
/// The default runs sequentially with no parse cache and no result limit.
///
/// ```rust
/// use sift_executor::{CacheConfig, ExecutorConfig};
///
/// let config = ExecutorConfig::new()
///     .with_cache(CacheConfig::default())
///     .with_max_results(10_000);
/// assert!(!config.parallel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
    /// Parse cache settings; `None` parses every query afresh.
    pub cache: Option<CacheConfig>,
    /// Evaluate records on the rayon pool. Ignored without the `parallel`
    /// feature.
    pub parallel: bool,
    /// Fail with `ResultTooLarge` when more records than this match.
    pub max_results: Option<usize>,
}

impl ExecutorConfig {
    /// Same as [`ExecutorConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns on the parse cache.
    pub fn with_cache(self, cache: CacheConfig) -> Self {
        Self {
            cache: Some(cache),
            ..self
        }
    }

    /// Chooses between sequential and parallel evaluation.
    pub fn with_parallel(self, parallel: bool) -> Self {
        Self { parallel, ..self }
    }

    /// Caps the number of matching records.
    pub fn with_max_results(self, limit: usize) -> Self {
        Self {
            max_results: Some(limit),
            ..self
        }
    }
}

/// Size and lifetime of the parse cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Distinct queries kept before the least recently used is dropped.
    pub max_entries: usize,
    /// How long a parsed query stays reusable.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 1_000,
            ttl: Duration::from_secs(300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential_and_uncached() {
        let config = ExecutorConfig::new();
        assert!(config.cache.is_none());
        assert!(!config.parallel);
        assert!(config.max_results.is_none());
    }

    #[test]
    fn test_setters_keep_earlier_choices() {
        let config = ExecutorConfig::new()
            .with_max_results(50)
            .with_parallel(true)
            .with_cache(CacheConfig::default());

        assert_eq!(config.cache, Some(CacheConfig::default()));
        assert!(config.parallel);
        assert_eq!(config.max_results, Some(50));
    }

    #[test]
    fn test_cache_defaults() {
        let cache = CacheConfig::default();
        assert_eq!(cache.max_entries, 1_000);
        assert_eq!(cache.ttl, Duration::from_secs(300));
    }
}
