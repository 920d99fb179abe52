//! # sift-executor
//!
//! Filter execution engine for string record stores.
//!
//! This crate bridges the [`sift`] parser and evaluator with any record store
//! that implements [`RecordStore`]:
//!
//! - **Natural-language path** - parse → validate → evaluate against the store
//! - **Structured path** - typed or raw filter values → validate → evaluate
//! - **Parse caching** - optional LRU cache of parsed filter sets
//! - **Optional parallelism** - enable the `parallel` feature for
//!   order-preserving multi-threaded evaluation
//!
//! ## Quick Start
//!
//! ```ignore
//! use sift_executor::QueryExecutor;
//!
//! // Assumes `store` implements RecordStore
//! let executor = QueryExecutor::new(&store);
//!
//! let result = executor.execute("single word palindromes")?;
//! println!("Found {} strings", result.count());
//!
//! for record in &result {
//!     println!("{}", record.value);
//! }
//! ```
//!
//! ## With Configuration
//!
//! ```ignore
//! use sift_executor::{CacheConfig, ExecutorConfig, QueryExecutor};
//!
//! let config = ExecutorConfig::new()
//!     .with_cache(CacheConfig::default())
//!     .with_max_results(10_000);
//!
//! let executor = QueryExecutor::with_config(&store, config);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      sift-executor                        │
//! │                                                           │
//! │  QueryExecutor                                            │
//! │  ├── parse query text → FilterSet (sift, cached)         │
//! │  ├── validate FilterSet (sift)                            │
//! │  ├── scan records (via RecordStore trait)                 │
//! │  ├── evaluate predicates in store order                   │
//! │  └── return QueryResult with stats                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cache;
mod config;
mod error;
mod executor;
mod result;
mod traits;

// Public re-exports
pub use cache::FilterCache;
pub use config::{CacheConfig, ExecutorConfig};
pub use error::{ExecResult, ExecutorError};
pub use executor::QueryExecutor;
pub use result::{ExecutionStats, QueryResult};
pub use traits::RecordStore;

// Re-export commonly used types from sift for convenience
pub use sift::{FilterParams, FilterSet, StringRecord};
