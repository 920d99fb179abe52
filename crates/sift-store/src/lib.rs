//! # sift-store
//!
//! Storage and service layer for the `sift` filtering engine.
//!
//! - **`MemoryStore`**: thread-safe [`RecordStore`](sift_executor::RecordStore)
//!   keyed by content hash, with atomic insert-if-absent
//! - **`StringService`**: create/get/delete plus structured and
//!   natural-language filtering with usage statistics
//! - **`persistence`** (default feature): save/load a `MemoryStore` as a JSON
//!   snapshot with per-record hash verification
//! - **`parallel`**: forwards to `sift-executor/parallel`
//!
//! ## Quick Start
//!
//! ```rust
//! use sift_store::{MemoryStore, StringService};
//!
//! let store = MemoryStore::new();
//! let service = StringService::new(&store);
//!
//! service.create("racecar").unwrap();
//! service.create("level").unwrap();
//! service.create("hello").unwrap();
//!
//! let result = service
//!     .filter_natural_language("palindromes at least 6 characters")
//!     .unwrap();
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].value, "racecar");
//! ```

pub mod error;
pub mod memory;

// Feature-gated modules
#[cfg(feature = "persistence")]
pub mod persistence;

pub mod service;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use service::{NaturalLanguageResult, ServiceConfig, ServiceStats, StringService};

#[cfg(feature = "persistence")]
pub use persistence::StoreSnapshot;

// Re-export from sift for convenience
pub use sift::{FilterParams, FilterSet, StringRecord};
