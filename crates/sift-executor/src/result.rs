//! Query result types.

use std::time::Duration;

use sift::{FilterSet, StringRecord};

/// Result of a query execution.
///
/// Contains the filter set that was applied, the matching records in store
/// order (most recently created first) and execution statistics.
///
/// # Example
///
/// ```ignore
/// let result = executor.execute("palindromes")?;
///
/// println!("Applied {}", result.filters);
/// for record in &result {
///     println!("{}", record.value);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// The filter set that was applied.
    pub filters: FilterSet,
    /// Matching records, in store order.
    pub records: Vec<StringRecord>,
    /// Execution statistics.
    pub stats: ExecutionStats,
}

impl QueryResult {
    /// Creates a new QueryResult.
    pub fn new(filters: FilterSet, records: Vec<StringRecord>, stats: ExecutionStats) -> Self {
        Self {
            filters,
            records,
            stats,
        }
    }

    /// Creates an empty QueryResult for the given filters.
    pub fn empty(filters: FilterSet) -> Self {
        Self::new(filters, Vec::new(), ExecutionStats::default())
    }

    /// Returns the number of matching records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks if a record holding `value` matched.
    pub fn contains(&self, value: &str) -> bool {
        self.records.iter().any(|r| r.value == value)
    }

    /// Returns an iterator over matching records.
    pub fn iter(&self) -> std::slice::Iter<'_, StringRecord> {
        self.records.iter()
    }

    /// Returns the matching values in store order.
    pub fn values(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.value.as_str()).collect()
    }
}

impl IntoIterator for QueryResult {
    type Item = StringRecord;
    type IntoIter = std::vec::IntoIter<StringRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a StringRecord;
    type IntoIter = std::slice::Iter<'a, StringRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Statistics from query execution.
#[derive(Debug, Clone, Default)]
pub struct ExecutionStats {
    /// Total execution duration.
    pub duration: Duration,
    /// Number of records the filters were evaluated against.
    pub records_scanned: usize,
    /// Whether the parsed filter set was served from cache.
    pub cache_hit: bool,
}

impl ExecutionStats {
    /// Creates new execution stats.
    pub fn new(duration: Duration, records_scanned: usize, cache_hit: bool) -> Self {
        Self {
            duration,
            records_scanned,
            cache_hit,
        }
    }
}
