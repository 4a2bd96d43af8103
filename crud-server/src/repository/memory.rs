//! In-memory Record Repository
//!
//! Keeps records in an ordered map. Ids are handed out from a counter that
//! never goes backwards, so a deleted id is never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use crud_core::domain::record::Record;
use tokio::sync::RwLock;

use super::{RecordRepository, RepositoryError, Result};

#[derive(Debug, Default)]
pub struct InMemoryRecordRepository {
    inner: RwLock<Store>,
}

#[derive(Debug, Default)]
struct Store {
    records: BTreeMap<i64, Record>,
    last_id: i64,
}

impl InMemoryRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn find_all(&self) -> Result<Vec<Record>> {
        let store = self.inner.read().await;
        Ok(store.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>> {
        let store = self.inner.read().await;
        Ok(store.records.get(&id).cloned())
    }

    async fn save(&self, mut record: Record) -> Result<Record> {
        let mut store = self.inner.write().await;

        match record.id {
            Some(id) => {
                let slot = store
                    .records
                    .get_mut(&id)
                    .ok_or(RepositoryError::NotFound(id))?;
                *slot = record.clone();
            }
            None => {
                store.last_id += 1;
                let id = store.last_id;
                record.id = Some(id);
                store.records.insert(id, record.clone());
            }
        }

        Ok(record)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let mut store = self.inner.write().await;
        Ok(store.records.remove(&id).is_some())
    }
}
