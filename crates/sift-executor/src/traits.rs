//! Traits for record storage.
//!
//! This module defines the [`RecordStore`] trait that must be implemented by
//! any store the executor runs queries against.
//!
//! # Architecture Note
//!
//! This crate intentionally does NOT depend on `sift-store`. The trait is
//! defined here and implemented by concrete stores downstream, so a database
//! backed store can be plugged in without pulling in the in-memory one.
//!
//! # Contract
//!
//! - At most one record per content hash. `insert_if_absent` must perform the
//!   duplicate check and the insert atomically, also under concurrent
//!   submissions of the same value.
//! - `scan` returns records most recently created first.
//! - `delete` removes every record holding the value and reports how many
//!   were removed.

use sift::StringRecord;

use crate::error::ExecResult;

/// Trait for stores that hold analyzed string records.
///
/// # Required Methods
///
/// - [`insert_if_absent`](Self::insert_if_absent) - Analyze and store a new value
/// - [`get`](Self::get) - Look up a record by its value
/// - [`delete`](Self::delete) - Remove a value
/// - [`scan`](Self::scan) - All records, newest first
pub trait RecordStore: Send + Sync {
    /// Analyzes and stores `value` unless a record with the same content
    /// hash already exists.
    ///
    /// Returns [`ExecutorError::AlreadyExists`](crate::ExecutorError::AlreadyExists)
    /// for duplicates.
    fn insert_if_absent(&self, value: &str) -> ExecResult<StringRecord>;

    /// Gets the record holding exactly `value`.
    ///
    /// Returns [`ExecutorError::NotFound`](crate::ExecutorError::NotFound)
    /// if there is none.
    fn get(&self, value: &str) -> ExecResult<StringRecord>;

    /// Removes every record holding `value` and returns how many were removed.
    fn delete(&self, value: &str) -> ExecResult<usize>;

    /// Returns all records, most recently created first.
    fn scan(&self) -> ExecResult<Vec<StringRecord>>;

    /// Returns the number of stored records.
    fn len(&self) -> ExecResult<usize> {
        Ok(self.scan()?.len())
    }

    /// Returns true if the store holds no records.
    fn is_empty(&self) -> ExecResult<bool> {
        Ok(self.len()? == 0)
    }
}
