//! Thread-safe in-memory record store.

use std::collections::HashMap;

use parking_lot::RwLock;
use sift::StringRecord;
use sift_executor::{ExecResult, ExecutorError, RecordStore};
use tracing::{debug, warn};

/// A stored record plus its insertion sequence number.
#[derive(Debug, Clone)]
struct Entry {
    seq: u64,
    record: StringRecord,
}

#[derive(Debug, Default)]
struct Inner {
    by_hash: HashMap<String, Entry>,
    next_seq: u64,
}

impl Inner {
    /// Inserts `record` unless its hash is taken. Returns false for duplicates.
    fn insert(&mut self, record: StringRecord) -> bool {
        if self.by_hash.contains_key(record.content_hash()) {
            return false;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.by_hash
            .insert(record.content_hash().to_string(), Entry { seq, record });
        true
    }
}

/// In-memory [`RecordStore`] keyed by content hash.
///
/// The duplicate check and the insert happen under one write lock, so
/// concurrent submissions of the same value store exactly one record.
/// Scans return records newest first; records created at the same instant
/// are ordered by insertion, later insert first.
///
/// # Example
///
/// ```rust
/// use sift_executor::RecordStore;
/// use sift_store::MemoryStore;
///
/// let store = MemoryStore::new();
/// store.insert_if_absent("level").unwrap();
/// assert!(store.insert_if_absent("level").is_err());
/// assert_eq!(store.len().unwrap(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records, keeping their timestamps.
    ///
    /// Records are inserted in iteration order; a record whose hash is
    /// already present is skipped.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = StringRecord>,
    {
        let store = Self::new();
        for record in records {
            if !store.insert_record(record) {
                warn!("skipped duplicate record while building store");
            }
        }
        store
    }

    /// Inserts a fully built record. Returns false if its hash is taken.
    pub fn insert_record(&self, record: StringRecord) -> bool {
        self.inner.write().insert(record)
    }

    /// Checks if a record holds `value`.
    pub fn contains(&self, value: &str) -> bool {
        let hash = sift::content_hash(value);
        self.inner.read().by_hash.contains_key(&hash)
    }

    /// Removes every record.
    pub fn clear(&self) {
        self.inner.write().by_hash.clear();
    }
}

impl RecordStore for MemoryStore {
    fn insert_if_absent(&self, value: &str) -> ExecResult<StringRecord> {
        let record = StringRecord::new(value);
        let mut inner = self.inner.write();
        if !inner.insert(record.clone()) {
            return Err(ExecutorError::AlreadyExists {
                content_hash: record.content_hash().to_string(),
            });
        }
        debug!(hash = record.content_hash(), "record inserted");
        Ok(record)
    }

    fn get(&self, value: &str) -> ExecResult<StringRecord> {
        let hash = sift::content_hash(value);
        self.inner
            .read()
            .by_hash
            .get(&hash)
            .filter(|entry| entry.record.value == value)
            .map(|entry| entry.record.clone())
            .ok_or_else(|| ExecutorError::NotFound {
                value: value.to_string(),
            })
    }

    fn delete(&self, value: &str) -> ExecResult<usize> {
        let mut inner = self.inner.write();
        let before = inner.by_hash.len();
        inner.by_hash.retain(|_, entry| entry.record.value != value);
        Ok(before - inner.by_hash.len())
    }

    fn scan(&self) -> ExecResult<Vec<StringRecord>> {
        let inner = self.inner.read();
        let mut entries: Vec<&Entry> = inner.by_hash.values().collect();
        entries.sort_by(|a, b| {
            b.record
                .created_at
                .cmp(&a.record.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(entries.into_iter().map(|e| e.record.clone()).collect())
    }

    fn len(&self) -> ExecResult<usize> {
        Ok(self.inner.read().by_hash.len())
    }
}
