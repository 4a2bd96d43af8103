//! Record API endpoints

use crate::CrudClient;
use crate::error::Result;
use crud_core::domain::record::Record;
use crud_core::dto::record::RecordPayload;

impl CrudClient {
    // =============================================================================
    // Record Management
    // =============================================================================

    /// List all records
    pub async fn list_records(&self) -> Result<Vec<Record>> {
        let response = self.client.get(self.url("/api")).send().await?;

        self.handle_response(response).await
    }

    /// Get a record by ID
    ///
    /// A missing record surfaces as an `ApiError` with status 404, see
    /// [`ClientError::is_not_found`](crate::ClientError::is_not_found).
    pub async fn get_record(&self, id: i64) -> Result<Record> {
        let url = self.url(&format!("/api/{}", id));
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Create a new record
    ///
    /// # Returns
    /// The stored record with its generated id
    pub async fn create_record(&self, req: &RecordPayload) -> Result<Record> {
        let response = self.client.post(self.url("/api")).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Overwrite name, age and city of an existing record
    pub async fn update_record(&self, id: i64, req: &RecordPayload) -> Result<Record> {
        let url = self.url(&format!("/api/{}", id));
        let response = self.client.put(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Delete a record
    pub async fn delete_record(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("/api/{}", id));
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
