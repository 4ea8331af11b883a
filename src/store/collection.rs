//! In-memory record store

use crate::error::{Result, StoreError, StoreResult};
use crate::store::Record;
use std::collections::HashMap;

/// Records keyed by id
///
/// Enumeration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    records: HashMap<String, Record>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, refusing ids that are already present
    pub fn add(&mut self, record: Record) -> StoreResult<()> {
        if self.records.contains_key(&record.id) {
            return Err(StoreError::DuplicateKey(record.id));
        }
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Delete the record with the given id
    pub fn remove(&mut self, id: &str) -> StoreResult<()> {
        match self.records.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    /// All records, in no particular order
    pub fn list(&self) -> Vec<Record> {
        self.records.values().cloned().collect()
    }

    /// Look up a record by id
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Check whether a record with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize all records as a JSON array
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.list())?)
    }
}

impl FromIterator<Record> for Store {
    /// Later records with a repeated id replace earlier ones
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Store {
            records: iter.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }
}
