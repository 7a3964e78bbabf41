use crate::loader::{self, LoadReport};
use crate::types::ReviewRecord;
use std::path::Path;

/// The loaded review rows, read-only for the rest of the run.
///
/// Passed explicitly to every query instead of living in a global.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<ReviewRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<ReviewRecord>) -> Self {
        Self { records }
    }

    /// Load from disk; an unreadable file produces an empty store.
    pub fn open(path: &Path) -> (Self, LoadReport) {
        let (records, report) = loader::load_or_empty(path);
        (Self::new(records), report)
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<ReviewRecord>> for RecordStore {
    fn from(records: Vec<ReviewRecord>) -> Self {
        Self::new(records)
    }
}
