use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{RecordStore, StoreError};

/// In-process document store with the same contract as the remote adapter.
/// Backs the test suites and lets the server run without a remote store.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.records.read().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.records.write().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn merge(&self, key: &str, partial: Value) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap();
        let slot = records
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));

        match partial {
            Value::Object(fields) => {
                if let Some(existing) = slot.as_object_mut() {
                    existing.extend(fields);
                } else {
                    *slot = Value::Object(fields);
                }
            }
            other => *slot = other,
        }

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.records.write().unwrap().remove(key);
        Ok(())
    }

    async fn get_all(&self) -> Result<Map<String, Value>, StoreError> {
        Ok(self
            .records
            .read()
            .unwrap()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}
