//! Repository Module
//!
//! Data access layer for the server.
//! The record store is trait-based so the service can run against
//! Postgres in production and an in-memory map in tests or local runs.

pub mod memory;
pub mod record;

use async_trait::async_trait;
use crud_core::domain::record::Record;
use thiserror::Error;

// Re-export implementations
pub use memory::InMemoryRecordRepository;
pub use record::PgRecordRepository;

/// Errors raised by a record store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("record {0} not found")]
    NotFound(i64),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Single-table store for records
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// All records in the store's natural (ascending id) order
    async fn find_all(&self) -> Result<Vec<Record>>;

    /// Look up a record by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Record>>;

    /// Insert the record when it has no id, overwrite it otherwise
    ///
    /// Returns the stored record, including the generated id on insert.
    /// Overwriting an id that no longer exists yields `NotFound`.
    async fn save(&self, record: Record) -> Result<Record>;

    /// Delete a record by id, returning whether a row was removed
    async fn delete_by_id(&self, id: i64) -> Result<bool>;
}
