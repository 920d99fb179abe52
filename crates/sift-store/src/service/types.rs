//! Types for the string service.

use sift::{FilterSet, StringRecord};

/// Result of a natural-language filter request.
#[derive(Debug, Clone)]
pub struct NaturalLanguageResult {
    /// The query text as submitted.
    pub query: String,
    /// Filters the query was interpreted as.
    pub interpreted: FilterSet,
    /// Matching records, newest first.
    pub records: Vec<StringRecord>,
}

impl NaturalLanguageResult {
    /// Returns the number of matching records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Statistics about service usage.
#[derive(Debug, Clone, Default)]
pub struct ServiceStats {
    /// Number of filter requests handled (both paths).
    pub queries_executed: usize,
    /// Requests rejected because the query or parameters could not be read.
    pub parse_failures: usize,
    /// Requests rejected because the filters contradicted each other.
    pub conflicts: usize,
    /// Total records returned across all successful requests.
    pub records_returned: usize,
    /// Requests whose parsed filters came from the cache.
    pub cache_hits: usize,
}

impl ServiceStats {
    /// Returns the number of requests that produced a result.
    pub fn successful(&self) -> usize {
        self.queries_executed
            .saturating_sub(self.parse_failures + self.conflicts)
    }

    /// Returns the average number of records per successful request.
    pub fn avg_records(&self) -> f64 {
        match self.successful() {
            0 => 0.0,
            n => self.records_returned as f64 / n as f64,
        }
    }
}

impl std::fmt::Display for ServiceStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "String Service Statistics:")?;
        writeln!(f, "  Queries:         {}", self.queries_executed)?;
        writeln!(f, "  Parse failures:  {}", self.parse_failures)?;
        writeln!(f, "  Conflicts:       {}", self.conflicts)?;
        writeln!(f, "  Records:         {}", self.records_returned)?;
        writeln!(f, "  Avg records:     {:.1}", self.avg_records())?;
        writeln!(f, "  Cache hits:      {}", self.cache_hits)?;
        Ok(())
    }
}
