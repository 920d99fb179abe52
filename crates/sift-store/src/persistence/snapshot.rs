//! JSON snapshot of a memory store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sift::StringRecord;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serialized contents of a [`MemoryStore`](crate::MemoryStore).
///
/// Records are written newest first, the same order a scan returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Snapshot format version.
    pub format_version: u32,
    /// When the snapshot was taken.
    pub saved_at: DateTime<Utc>,
    /// Every record in the store, newest first.
    pub records: Vec<StringRecord>,
}

impl StoreSnapshot {
    /// Creates a snapshot of the given records, stamped now.
    pub fn new(records: Vec<StringRecord>) -> Self {
        Self {
            format_version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            records,
        }
    }

    /// Returns the number of records in the snapshot.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Saves the snapshot to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> StoreResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| StoreError::io_error(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        writer.flush().map_err(|e| StoreError::io_error(path, e))?;
        Ok(())
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// Only the format version is checked here; record integrity is checked
    /// by [`verify`](Self::verify).
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| StoreError::io_error(path, e))?;
        let reader = BufReader::new(file);
        let snapshot: Self = serde_json::from_reader(reader)
            .map_err(|e| StoreError::Deserialization(e.to_string()))?;

        if snapshot.format_version != SNAPSHOT_VERSION {
            return Err(StoreError::invalid_format(format!(
                "unsupported version: {} (expected {})",
                snapshot.format_version, SNAPSHOT_VERSION
            )));
        }
        Ok(snapshot)
    }

    /// Checks every record's stored hash against a hash of its value.
    pub fn verify(&self) -> StoreResult<()> {
        for record in &self.records {
            let actual = sift::content_hash(&record.value);
            if actual != record.content_hash() {
                return Err(StoreError::HashMismatch {
                    expected: record.content_hash().to_string(),
                    actual,
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for StoreSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store Snapshot")?;
        writeln!(f, "  Version:   {}", self.format_version)?;
        writeln!(f, "  Saved:     {}", self.saved_at)?;
        writeln!(f, "  Records:   {}", self.count())?;
        Ok(())
    }
}
