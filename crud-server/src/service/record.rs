//! Record Service
//!
//! Thin delegation to the record repository. The only logic of its own is
//! the update merge and turning lookup misses into `NotFound`.

use std::sync::Arc;

use crud_core::domain::record::Record;
use crud_core::dto::record::RecordPayload;
use thiserror::Error;

use crate::repository::{RecordRepository, RepositoryError};

/// Service error type
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for RecordError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => RecordError::NotFound(id),
            other => RecordError::Repository(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;

#[derive(Clone)]
pub struct RecordService {
    repository: Arc<dyn RecordRepository>,
}

impl RecordService {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    /// List all records
    pub async fn get_all(&self) -> Result<Vec<Record>> {
        Ok(self.repository.find_all().await?)
    }

    /// Get a record by id, `None` when absent
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Record>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Persist a new record and return it with its generated id
    pub async fn create(&self, payload: RecordPayload) -> Result<Record> {
        let record = self.repository.save(Record::from(payload)).await?;

        tracing::debug!("Record created: {:?}", record.id);

        Ok(record)
    }

    /// Overwrite name, age and city of an existing record
    pub async fn update(&self, id: i64, payload: RecordPayload) -> Result<Record> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RecordError::NotFound(id))?;

        record.overwrite_with(payload);

        Ok(self.repository.save(record).await?)
    }

    /// Delete a record by id
    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if !deleted {
            return Err(RecordError::NotFound(id));
        }

        Ok(())
    }
}
