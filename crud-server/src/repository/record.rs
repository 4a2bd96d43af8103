//! Postgres Record Repository
//!
//! Handles all database operations on the `records` table.

use async_trait::async_trait;
use crud_core::domain::record::Record;
use sqlx::PgPool;

use super::{RecordRepository, RepositoryError, Result};

/// Record store backed by a Postgres connection pool
#[derive(Debug, Clone)]
pub struct PgRecordRepository {
    pool: PgPool,
}

impl PgRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn find_all(&self) -> Result<Vec<Record>> {
        let rows = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, name, age, city
            FROM records
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>> {
        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            SELECT id, name, age, city
            FROM records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into()))
    }

    async fn save(&self, record: Record) -> Result<Record> {
        let Some(id) = record.id else {
            let row = sqlx::query_as::<_, RecordRow>(
                r#"
                INSERT INTO records (name, age, city)
                VALUES ($1, $2, $3)
                RETURNING id, name, age, city
                "#,
            )
            .bind(&record.name)
            .bind(record.age)
            .bind(&record.city)
            .fetch_one(&self.pool)
            .await?;

            return Ok(row.into());
        };

        let row = sqlx::query_as::<_, RecordRow>(
            r#"
            UPDATE records
            SET name = $1, age = $2, city = $3
            WHERE id = $4
            RETURNING id, name, age, city
            "#,
        )
        .bind(&record.name)
        .bind(record.age)
        .bind(&record.city)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Record::from).ok_or(RepositoryError::NotFound(id))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// =============================================================================
// Database Row Types
// =============================================================================

#[derive(sqlx::FromRow)]
struct RecordRow {
    id: i64,
    name: Option<String>,
    age: i32,
    city: Option<String>,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            id: Some(row.id),
            name: row.name,
            age: row.age,
            city: row.city,
        }
    }
}
