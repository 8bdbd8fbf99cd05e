//! In-memory record store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{RecordId, RecordStore};
use crate::error::StoreError;

/// Records held in a map behind a lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<RecordId, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding one record.
    pub fn with_record(id: RecordId, content: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, content.into());
        store
    }

    pub fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, id: &RecordId) -> Result<Option<String>, StoreError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        Ok(records.get(id).cloned())
    }

    fn replace(&self, id: &RecordId, content: &str) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        records.insert(id.clone(), content.to_string());
        Ok(())
    }
}
