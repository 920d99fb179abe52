//! String storage and filtering service.
//!
//! This module provides a high-level facade over a record store: creation
//! with input validation, lookup, deletion, and both filter paths with usage
//! statistics.
//!
//! # Example
//!
//! ```ignore
//! use sift::FilterParams;
//! use sift_store::{MemoryStore, StringService};
//!
//! let store = MemoryStore::new();
//! let service = StringService::new(&store);
//!
//! service.create("racecar")?;
//! service.create("hello world")?;
//!
//! // Structured filters from raw parameters
//! let params = FilterParams::from_pairs([("is_palindrome", "true")]);
//! let listed = service.list(&params)?;
//!
//! // Natural language
//! let result = service.filter_natural_language("single word palindromes")?;
//! println!("{} -> {}", result.query, result.interpreted);
//! ```

mod types;

pub use types::{NaturalLanguageResult, ServiceStats};

use parking_lot::RwLock;
use sift::{FilterParams, FilterSet, SiftError, StringRecord};
use sift_executor::{
    CacheConfig, ExecResult, ExecutorConfig, ExecutorError, QueryExecutor, QueryResult,
    RecordStore,
};
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult};

/// Configuration for the string service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Configuration of the underlying executor.
    pub executor: ExecutorConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            executor: ExecutorConfig::new().with_cache(CacheConfig::default()),
        }
    }
}

impl ServiceConfig {
    /// Creates a config with no parsed-filter caching.
    pub fn no_cache() -> Self {
        Self {
            executor: ExecutorConfig::default(),
        }
    }

    /// Creates a config around a custom executor configuration.
    pub fn with_executor(executor: ExecutorConfig) -> Self {
        Self { executor }
    }
}

/// A high-level service for storing and filtering strings.
pub struct StringService<'a, S: RecordStore> {
    store: &'a S,
    executor: QueryExecutor<'a>,
    config: ServiceConfig,
    stats: RwLock<ServiceStats>,
}

impl<'a, S: RecordStore> StringService<'a, S> {
    /// Creates a new service with default configuration.
    pub fn new(store: &'a S) -> Self {
        Self::with_config(store, ServiceConfig::default())
    }

    /// Creates a new service with custom configuration.
    pub fn with_config(store: &'a S, config: ServiceConfig) -> Self {
        let executor = QueryExecutor::with_config(store, config.executor.clone());
        Self {
            store,
            executor,
            config,
            stats: RwLock::new(ServiceStats::default()),
        }
    }

    /// Analyzes and stores a new value.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidValue`] for an empty or whitespace-only value,
    /// `AlreadyExists` if the value is already stored.
    pub fn create(&self, value: &str) -> StoreResult<StringRecord> {
        if value.trim().is_empty() {
            return Err(StoreError::invalid_value("value must not be empty or blank"));
        }

        match self.store.insert_if_absent(value) {
            Ok(record) => {
                info!(
                    hash = record.content_hash(),
                    length = record.length(),
                    "string created"
                );
                Ok(record)
            }
            Err(err) => {
                if let ExecutorError::AlreadyExists { content_hash } = &err {
                    warn!(hash = %content_hash, "rejected duplicate string");
                }
                Err(err.into())
            }
        }
    }

    /// Gets the record holding exactly `value`.
    pub fn get(&self, value: &str) -> StoreResult<StringRecord> {
        Ok(self.store.get(value)?)
    }

    /// Deletes `value` and returns how many records were removed.
    ///
    /// # Errors
    ///
    /// `NotFound` if nothing was removed.
    pub fn delete(&self, value: &str) -> StoreResult<usize> {
        let removed = self.store.delete(value)?;
        if removed == 0 {
            return Err(ExecutorError::NotFound {
                value: value.to_string(),
            }
            .into());
        }
        info!(removed, "string deleted");
        Ok(removed)
    }

    /// Lists records matching raw filter parameters.
    ///
    /// Empty parameters list every record.
    pub fn list(&self, params: &FilterParams) -> StoreResult<QueryResult> {
        let outcome = self.executor.execute_params(params);
        self.track(&outcome);
        Ok(outcome?)
    }

    /// Lists records matching an already-typed filter set.
    pub fn list_filters(&self, filters: &FilterSet) -> StoreResult<QueryResult> {
        let outcome = self.executor.execute_filters(filters);
        self.track(&outcome);
        Ok(outcome?)
    }

    /// Interprets a natural-language query and returns the matching records.
    ///
    /// The result carries the query text and the filters it was read as.
    pub fn filter_natural_language(&self, query: &str) -> StoreResult<NaturalLanguageResult> {
        let outcome = self.executor.execute(query);
        self.track(&outcome);
        let result = outcome?;
        Ok(NaturalLanguageResult {
            query: query.to_string(),
            interpreted: result.filters,
            records: result.records,
        })
    }

    /// Checks if the stored `value` matches a natural-language query.
    pub fn matches(&self, value: &str, query: &str) -> StoreResult<bool> {
        Ok(self.executor.matches(value, query)?)
    }

    fn track(&self, outcome: &ExecResult<QueryResult>) {
        let mut stats = self.stats.write();
        stats.queries_executed += 1;
        match outcome {
            Ok(result) => {
                stats.records_returned += result.count();
                if result.stats.cache_hit {
                    stats.cache_hits += 1;
                }
            }
            Err(ExecutorError::Query(SiftError::Conflict { .. })) => stats.conflicts += 1,
            Err(ExecutorError::Query(_)) => stats.parse_failures += 1,
            Err(_) => {}
        }
    }

    /// Clears the parsed-filter cache.
    pub fn clear_cache(&self) {
        if let Some(cache) = self.executor.cache() {
            cache.clear();
        }
    }

    /// Returns the current cache size.
    pub fn cache_len(&self) -> usize {
        self.executor.cache().map(|c| c.len()).unwrap_or(0)
    }

    /// Returns service statistics.
    pub fn stats(&self) -> ServiceStats {
        self.stats.read().clone()
    }

    /// Resets statistics.
    pub fn reset_stats(&self) {
        *self.stats.write() = ServiceStats::default();
    }

    /// Returns a reference to the underlying executor.
    pub fn executor(&self) -> &QueryExecutor<'a> {
        &self.executor
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &'a S {
        self.store
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
