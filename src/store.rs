//! Session-long list of listings in the order they were loaded or entered.

use crate::models::PropertyRecord;

/// Append-only record list. The table view may reorder its own rows, but this
/// store always keeps insertion order.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<PropertyRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: PropertyRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&PropertyRecord> {
        self.records.last()
    }
}
