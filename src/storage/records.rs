//! In-memory record store
//!
//! Holds the journal for the lifetime of the process. Records are only ever
//! appended; there is no edit, delete or reorder. Nothing is written to disk.

use crate::models::{Record, RecordId};

/// What changed in the store after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// A record was appended at `index`
    Appended { index: usize, id: RecordId },
}

/// Ordered, append-only collection of records
///
/// The store bumps its revision on every mutation so views can tell when the
/// table needs to be re-projected.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    revision: u64,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end, preserving insertion order
    pub fn append(&mut self, record: Record) -> StoreChange {
        let index = self.records.len();
        let id = record.id;
        self.records.push(record);
        self.revision += 1;
        StoreChange::Appended { index, id }
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Find a record by id
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Monotonic counter of mutations
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
