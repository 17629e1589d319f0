//! Storage of completed comparisons
//!
//! Records are keyed by a random id and carry the UTC time they were made.
//! [`MemoryStore`] keeps them in process; anything durable implements
//! [`ComparisonStore`].

use std::collections::HashMap;
use std::fmt;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::Comparison;
use crate::error::StoreError;

/// Identifier of a stored comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comparison together with its inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRecord {
    pub id: RecordId,
    pub timestamp: DateTime<Utc>,
    pub original: String,
    pub modified: String,
    pub result: Comparison,
}

impl ComparisonRecord {
    pub fn new(original: impl Into<String>, modified: impl Into<String>, result: Comparison) -> Self {
        Self {
            id: RecordId::new(),
            timestamp: Utc::now(),
            original: original.into(),
            modified: modified.into(),
            result,
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Persistence interface for comparison records
pub trait ComparisonStore: Send + Sync {
    fn save(&self, record: ComparisonRecord) -> Result<RecordId, StoreError>;

    fn get(&self, id: RecordId) -> Result<ComparisonRecord, StoreError>;

    /// All records, oldest first
    fn list(&self) -> Result<Vec<ComparisonRecord>, StoreError>;
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<RecordId, ComparisonRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ComparisonStore for MemoryStore {
    fn save(&self, record: ComparisonRecord) -> Result<RecordId, StoreError> {
        let id = record.id;
        // A poisoned lock only means a writer panicked; the map is still usable.
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        records.insert(id, record);
        Ok(id)
    }

    fn get(&self, id: RecordId) -> Result<ComparisonRecord, StoreError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        records.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<ComparisonRecord>, StoreError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<ComparisonRecord> = records.values().cloned().collect();
        all.sort_by_key(|record| record.timestamp);
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DiffEngine;

    fn record(original: &str, modified: &str) -> ComparisonRecord {
        let result = DiffEngine::default().compare(original, modified);
        ComparisonRecord::new(original, modified, result)
    }

    #[test]
    fn test_save_and_get() {
        let store = MemoryStore::new();
        let saved = record("The cat sat.", "The dog sat.");

        let id = store.save(saved.clone()).unwrap();

        assert_eq!(store.get(id).unwrap(), saved);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_missing_record() {
        let store = MemoryStore::new();
        let id = RecordId::new();

        let err = store.get(id).unwrap_err();

        assert!(matches!(err, StoreError::NotFound(missing) if missing == id));
    }

    #[test]
    fn test_list_is_ordered_by_time() {
        let store = MemoryStore::new();
        let mut first = record("first version", "first version!");
        let second = record("second version", "second edition");
        first.timestamp = second.timestamp - chrono::Duration::seconds(5);

        store.save(second.clone()).unwrap();
        store.save(first.clone()).unwrap();

        let ids: Vec<RecordId> = store.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_record_json() {
        let saved = record("The cat sat.", "The dog sat.");

        let json = saved.to_json().unwrap();
        assert!(json.contains("\"leftColumn\""));
        assert!(json.contains("\"timestamp\""));

        let loaded = ComparisonRecord::from_json(&json).unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_bad_json() {
        let err = ComparisonRecord::from_json("{ not json").unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
