//! Query executor implementation.

use std::time::Instant;

use sift::{FilterParams, FilterSet, StringRecord};
use tracing::{debug, warn};

use crate::cache::FilterCache;
use crate::config::ExecutorConfig;
use crate::error::{ExecResult, ExecutorError};
use crate::result::{ExecutionStats, QueryResult};
use crate::traits::RecordStore;

/// Main query execution engine.
///
/// The executor bridges the filter parser and evaluator (`sift`) and any
/// record store that implements [`RecordStore`]. Every path goes through the
/// same validator before any record is evaluated.
///
/// # Example
///
/// ```ignore
/// use sift_executor::{QueryExecutor, RecordStore};
///
/// // Assumes MyStore implements RecordStore
/// let store = MyStore::new();
/// let executor = QueryExecutor::new(&store);
///
/// let result = executor.execute("strings longer than 5 characters")?;
/// println!("Found {} strings", result.count());
///
/// let is_match = executor.matches("racecar", "palindromes")?;
/// ```
pub struct QueryExecutor<'a> {
    /// Reference to the record store.
    store: &'a dyn RecordStore,
    /// Executor configuration.
    config: ExecutorConfig,
    /// Parsed-filter cache (optional).
    cache: Option<FilterCache>,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new executor with default configuration.
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self {
            store,
            config: ExecutorConfig::default(),
            cache: None,
        }
    }

    /// Creates an executor with custom configuration.
    pub fn with_config(store: &'a dyn RecordStore, config: ExecutorConfig) -> Self {
        let cache = config.cache.as_ref().map(FilterCache::new);
        Self {
            store,
            config,
            cache,
        }
    }

    /// Returns a reference to the cache if enabled.
    pub fn cache(&self) -> Option<&FilterCache> {
        self.cache.as_ref()
    }

    /// Returns a reference to the executor configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &'a dyn RecordStore {
        self.store
    }

    /// Parses a natural-language query into a filter set.
    ///
    /// Served from the cache when enabled. The returned filter set has not
    /// been validated.
    ///
    /// # Errors
    ///
    /// `UnrecognizedQuery` or `InvalidLengthConstraint` wrapped in
    /// [`ExecutorError::Query`].
    pub fn parse(&self, query: &str) -> ExecResult<FilterSet> {
        self.parse_cached(query).map(|(filters, _)| filters)
    }

    /// Executes a natural-language query against the store.
    ///
    /// Parses (or fetches from cache), validates and evaluates the query.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let result = executor.execute("single word palindromes")?;
    /// assert_eq!(result.filters.word_count, Some(1));
    /// ```
    pub fn execute(&self, query: &str) -> ExecResult<QueryResult> {
        let start = Instant::now();
        let (filters, cache_hit) = self.parse_cached(query)?;
        let result = self.run(filters, start, cache_hit)?;
        debug!(
            query,
            filters = %result.filters,
            matched = result.count(),
            scanned = result.stats.records_scanned,
            cache_hit,
            "natural-language query executed"
        );
        Ok(result)
    }

    /// Executes an already-typed filter set against the store.
    ///
    /// An empty filter set matches every record.
    pub fn execute_filters(&self, filters: &FilterSet) -> ExecResult<QueryResult> {
        let result = self.run(filters.clone(), Instant::now(), false)?;
        debug!(
            filters = %result.filters,
            matched = result.count(),
            scanned = result.stats.records_scanned,
            "filter query executed"
        );
        Ok(result)
    }

    /// Converts raw filter parameters and executes them against the store.
    ///
    /// # Errors
    ///
    /// `InvalidParameters` for text that does not convert, `Conflict` for a
    /// contradictory filter set, both wrapped in [`ExecutorError::Query`].
    pub fn execute_params(&self, params: &FilterParams) -> ExecResult<QueryResult> {
        let filters = FilterSet::from_params(params)?;
        self.execute_filters(&filters)
    }

    /// Checks if the stored record holding `value` matches a query.
    ///
    /// # Errors
    ///
    /// [`ExecutorError::NotFound`] if no record holds `value`, or any parse
    /// or validation error for `query`.
    pub fn matches(&self, value: &str, query: &str) -> ExecResult<bool> {
        let (filters, _) = self.parse_cached(query)?;
        sift::validate(&filters)?;
        let record = self.store.get(value)?;
        Ok(sift::matches(&filters, &record))
    }

    /// Parses `query`, consulting the cache first.
    fn parse_cached(&self, query: &str) -> ExecResult<(FilterSet, bool)> {
        if let Some(ref cache) = self.cache {
            if let Some(filters) = cache.lookup(query) {
                return Ok((filters, true));
            }
        }

        let filters = sift::parse(query)?;

        if let Some(ref cache) = self.cache {
            cache.remember(query, &filters);
        }

        Ok((filters, false))
    }

    /// Validates `filters` and evaluates them against a store snapshot.
    fn run(&self, filters: FilterSet, start: Instant, cache_hit: bool) -> ExecResult<QueryResult> {
        if let Err(err) = sift::validate(&filters) {
            warn!(filters = %filters, error = %err, "rejected conflicting filters");
            return Err(err.into());
        }

        let records = self.store.scan()?;
        let scanned = records.len();
        let matched = self.evaluate(&filters, records);

        if let Some(limit) = self.config.max_results {
            if matched.len() > limit {
                return Err(ExecutorError::ResultTooLarge {
                    count: matched.len(),
                    limit,
                });
            }
        }

        let stats = ExecutionStats::new(start.elapsed(), scanned, cache_hit);
        Ok(QueryResult::new(filters, matched, stats))
    }

    /// Keeps the records matching `filters`, preserving store order.
    fn evaluate(&self, filters: &FilterSet, records: Vec<StringRecord>) -> Vec<StringRecord> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            use rayon::prelude::*;
            return records
                .into_par_iter()
                .filter(|record| sift::matches(filters, record))
                .collect();
        }

        records
            .into_iter()
            .filter(|record| sift::matches(filters, record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CacheConfig;
    use sift::{FilterField, SiftError};
    use std::sync::Mutex;

    /// Simple store keeping records newest first.
    struct TestStore {
        records: Mutex<Vec<StringRecord>>,
    }

    impl TestStore {
        fn with_values(values: &[&str]) -> Self {
            let store = Self {
                records: Mutex::new(Vec::new()),
            };
            for value in values {
                store.insert_if_absent(value).unwrap();
            }
            store
        }
    }

    impl RecordStore for TestStore {
        fn insert_if_absent(&self, value: &str) -> ExecResult<StringRecord> {
            let record = StringRecord::new(value);
            let mut records = self.records.lock().unwrap();
            if records.iter().any(|r| r.content_hash() == record.content_hash()) {
                return Err(ExecutorError::AlreadyExists {
                    content_hash: record.content_hash().to_string(),
                });
            }
            records.insert(0, record.clone());
            Ok(record)
        }

        fn get(&self, value: &str) -> ExecResult<StringRecord> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.value == value)
                .cloned()
                .ok_or_else(|| ExecutorError::NotFound {
                    value: value.to_string(),
                })
        }

        fn delete(&self, value: &str) -> ExecResult<usize> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| r.value != value);
            Ok(before - records.len())
        }

        fn scan(&self) -> ExecResult<Vec<StringRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }
    }

    fn sample_store() -> TestStore {
        TestStore::with_values(&["hello", "level", "racecar", "nurses run", "A Santa at NASA"])
    }

    #[test]
    fn test_executor_new() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);
        assert!(executor.cache().is_none());
        assert!(!executor.config().parallel);
    }

    #[test]
    fn test_executor_with_cache() {
        let store = sample_store();
        let config = ExecutorConfig::new().with_cache(CacheConfig::default());
        let executor = QueryExecutor::with_config(&store, config);
        assert!(executor.cache().is_some());
    }

    #[test]
    fn test_execute_palindromes_in_store_order() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);

        let result = executor.execute("palindromes").unwrap();
        assert_eq!(
            result.values(),
            vec!["A Santa at NASA", "nurses run", "racecar", "level"]
        );
        assert_eq!(result.stats.records_scanned, 5);
    }

    #[test]
    fn test_execute_combined_query() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);

        let result = executor.execute("single word palindromes longer than 5 characters").unwrap();
        assert_eq!(result.values(), vec!["racecar"]);
        assert_eq!(result.filters.min_length, Some(6));
    }

    #[test]
    fn test_execute_conflicting_query() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);

        let err = executor
            .execute("longer than 10 characters and shorter than 5 characters")
            .unwrap_err();
        match err {
            ExecutorError::Query(SiftError::Conflict { fields, .. }) => {
                assert_eq!(fields, vec![FilterField::MinLength, FilterField::MaxLength]);
            }
            other => panic!("Expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_execute_unrecognized_query() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);

        let err = executor.execute("xyz abc def").unwrap_err();
        assert!(matches!(
            err,
            ExecutorError::Query(SiftError::UnrecognizedQuery { .. })
        ));
    }

    #[test]
    fn test_execute_filters_empty_matches_all() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);
        let result = executor.execute_filters(&FilterSet::new()).unwrap();
        assert_eq!(result.count(), 5);
    }

    #[test]
    fn test_execute_filters_validates() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);
        let err = executor
            .execute_filters(&FilterSet::new().with_word_count(-1))
            .unwrap_err();
        assert!(err.is_query_error());
    }

    #[test]
    fn test_execute_params() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);

        let params = FilterParams::from_pairs([("word_count", "2"), ("contains_character", "R")]);
        let result = executor.execute_params(&params).unwrap();
        assert_eq!(result.values(), vec!["nurses run"]);

        let params = FilterParams::from_pairs([("min_length", "abc")]);
        assert!(matches!(
            executor.execute_params(&params),
            Err(ExecutorError::Query(SiftError::InvalidParameters { .. }))
        ));
    }

    #[test]
    fn test_cache_hit_on_equivalent_query() {
        let store = sample_store();
        let config = ExecutorConfig::new().with_cache(CacheConfig::default());
        let executor = QueryExecutor::with_config(&store, config);

        let first = executor.execute("Palindromes").unwrap();
        assert!(!first.stats.cache_hit);

        let second = executor.execute("  palindromes ").unwrap();
        assert!(second.stats.cache_hit);
        assert_eq!(first.values(), second.values());
    }

    #[test]
    fn test_cache_does_not_hide_store_changes() {
        let store = sample_store();
        let config = ExecutorConfig::new().with_cache(CacheConfig::default());
        let executor = QueryExecutor::with_config(&store, config);

        assert_eq!(executor.execute("palindromes").unwrap().count(), 4);
        store.insert_if_absent("stats").unwrap();
        let result = executor.execute("palindromes").unwrap();
        assert!(result.stats.cache_hit);
        assert_eq!(result.count(), 5);
        assert_eq!(result.values()[0], "stats");
    }

    #[test]
    fn test_parse_errors_not_cached() {
        let store = sample_store();
        let config = ExecutorConfig::new().with_cache(CacheConfig::default());
        let executor = QueryExecutor::with_config(&store, config);

        assert!(executor.parse("nothing here").is_err());
        assert!(executor.cache().map_or(true, |c| c.is_empty()));
    }

    #[test]
    fn test_max_results() {
        let store = sample_store();
        let config = ExecutorConfig::new().with_max_results(2);
        let executor = QueryExecutor::with_config(&store, config);

        let err = executor.execute("palindromes").unwrap_err();
        assert!(matches!(
            err,
            ExecutorError::ResultTooLarge { count: 4, limit: 2 }
        ));

        assert_eq!(executor.execute("at most 5 characters").unwrap().count(), 2);
    }

    #[test]
    fn test_matches() {
        let store = sample_store();
        let executor = QueryExecutor::new(&store);

        assert!(executor.matches("racecar", "palindromes").unwrap());
        assert!(!executor.matches("hello", "palindromes").unwrap());
        assert!(matches!(
            executor.matches("missing", "palindromes"),
            Err(ExecutorError::NotFound { .. })
        ));
    }

    #[test]
    fn test_parallel_flag_preserves_order() {
        let store = sample_store();
        let config = ExecutorConfig::new().with_parallel(true);
        let executor = QueryExecutor::with_config(&store, config);

        let result = executor.execute("palindromes").unwrap();
        assert_eq!(
            result.values(),
            vec!["A Santa at NASA", "nurses run", "racecar", "level"]
        );
    }
}
