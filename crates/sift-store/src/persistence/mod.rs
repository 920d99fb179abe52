//! Save/load a memory store to/from disk.
//!
//! Snapshots are pretty-printed JSON so they can be inspected and edited by
//! hand. Loading re-analyzes every value, so derived properties in the file
//! are never trusted; only the content hash is checked against the value.
//!
//! # Example
//!
//! ```ignore
//! use sift_store::MemoryStore;
//!
//! store.save_snapshot("strings.json")?;
//!
//! let restored = MemoryStore::load_snapshot("strings.json")?;
//! ```

mod snapshot;

pub use snapshot::{StoreSnapshot, SNAPSHOT_VERSION};

use sift::StringRecord;
use sift_executor::RecordStore;
use std::path::Path;
use tracing::info;

use crate::error::{StoreError, StoreResult};
use crate::memory::MemoryStore;

impl MemoryStore {
    /// Captures the current contents as a snapshot.
    pub fn snapshot(&self) -> StoreResult<StoreSnapshot> {
        Ok(StoreSnapshot::new(self.scan()?))
    }

    /// Builds a store from a verified snapshot.
    ///
    /// # Errors
    ///
    /// [`StoreError::HashMismatch`] if a record's hash does not match its
    /// value, [`StoreError::InvalidFormat`] if two records share a hash.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> StoreResult<Self> {
        snapshot.verify()?;

        let store = MemoryStore::new();
        // Oldest first, so ties on created_at keep their saved order.
        for saved in snapshot.records.into_iter().rev() {
            let record = StringRecord::with_created_at(saved.value, saved.created_at);
            let hash = record.content_hash().to_string();
            if !store.insert_record(record) {
                return Err(StoreError::invalid_format(format!(
                    "duplicate record {hash}"
                )));
            }
        }
        Ok(store)
    }

    /// Writes the store to a JSON snapshot at `path`.
    pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> StoreResult<()> {
        let path = path.as_ref();
        let snapshot = self.snapshot()?;
        snapshot.save(path)?;
        info!(path = %path.display(), records = snapshot.count(), "snapshot saved");
        Ok(())
    }

    /// Reads a JSON snapshot at `path` into a new store.
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let snapshot = StoreSnapshot::load(path)?;
        let count = snapshot.count();
        let store = Self::from_snapshot(snapshot)?;
        info!(path = %path.display(), records = count, "snapshot loaded");
        Ok(store)
    }
}
