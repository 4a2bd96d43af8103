//! Record API Handlers
//!
//! HTTP endpoints for record management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use crud_core::domain::record::Record;
use crud_core::dto::record::RecordPayload;

use crate::api::AppState;
use crate::api::error::{ApiError, ApiResult};

/// GET /api
/// List all records
pub async fn list_records(State(state): State<AppState>) -> ApiResult<Json<Vec<Record>>> {
    tracing::info!("data fetched");

    let records = state.records.get_all().await?;

    Ok(Json(records))
}

/// GET /api/{id}
/// Get record by ID
pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Record>> {
    tracing::info!("data fetched for ID: {}", id);

    let record = state.records.get_by_id(id).await?.ok_or_else(|| {
        tracing::error!("failed to fetch data for ID: {}", id);
        ApiError::NotFound(format!("Record {} not found", id))
    })?;

    Ok(Json(record))
}

/// POST /api
/// Create a new record
pub async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<RecordPayload>,
) -> ApiResult<Json<Record>> {
    tracing::info!(
        "data added: name={:?}, age={}, city={:?}",
        req.name,
        req.age,
        req.city
    );

    let record = state.records.create(req).await?;

    Ok(Json(record))
}

/// PUT /api/{id}
/// Overwrite name, age and city of a record
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<RecordPayload>,
) -> ApiResult<Json<Record>> {
    tracing::info!("data updated for ID: {}", id);

    let record = state.records.update(id, req).await?;

    Ok(Json(record))
}

/// DELETE /api/{id}
/// Delete a record
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    tracing::info!("data deleted for ID: {}", id);

    state.records.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::api::create_router;
    use crate::repository::{InMemoryRecordRepository, RecordRepository, RepositoryError};
    use crate::service::RecordService;

    fn app() -> Router {
        let service = RecordService::new(Arc::new(InMemoryRecordRepository::new()));
        create_router(AppState::new(service))
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            // Extractor rejections answer in plain text
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let router = app();

        let (status, created) = send(
            &router,
            Method::POST,
            "/api",
            Some(json!({ "name": "Alice", "age": 30, "city": "Paris" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            created,
            json!({ "id": 1, "name": "Alice", "age": 30, "city": "Paris" })
        );

        let (status, updated) = send(
            &router,
            Method::PUT,
            "/api/1",
            Some(json!({ "name": "Alice", "age": 31, "city": "Lyon" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            updated,
            json!({ "id": 1, "name": "Alice", "age": 31, "city": "Lyon" })
        );

        let (status, body) = send(&router, Method::DELETE, "/api/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);

        let (status, body) = send(&router, Method::GET, "/api/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Record 1 not found" }));
    }

    #[tokio::test]
    async fn test_list_is_empty_initially() {
        let router = app();

        let (status, body) = send(&router, Method::GET, "/api", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_contains_created_records() {
        let router = app();
        for (name, age, city) in [("Alice", 30, "Paris"), ("Bob", 25, "Lyon")] {
            send(
                &router,
                Method::POST,
                "/api",
                Some(json!({ "name": name, "age": age, "city": city })),
            )
            .await;
        }

        let (status, body) = send(&router, Method::GET, "/api", None).await;
        assert_eq!(status, StatusCode::OK);

        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["name"].as_str())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Alice"));
        assert!(names.contains(&"Bob"));
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let router = app();

        let (status, created) = send(
            &router,
            Method::POST,
            "/api",
            Some(json!({ "id": 99, "name": "Alice", "age": 30, "city": "Paris" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["id"], json!(1));

        let (status, _) = send(&router, Method::GET, "/api/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_with_omitted_fields_clears_them() {
        let router = app();
        send(
            &router,
            Method::POST,
            "/api",
            Some(json!({ "name": "Alice", "age": 30, "city": "Paris" })),
        )
        .await;

        let (status, updated) =
            send(&router, Method::PUT, "/api/1", Some(json!({ "name": "Alice" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            updated,
            json!({ "id": 1, "name": "Alice", "age": 0, "city": null })
        );
    }

    #[tokio::test]
    async fn test_update_missing_is_404() {
        let router = app();

        let (status, _) = send(
            &router,
            Method::PUT,
            "/api/7",
            Some(json!({ "name": "Alice", "age": 30, "city": "Paris" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_missing_is_404() {
        let router = app();

        let (status, _) = send(&router, Method::DELETE, "/api/7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let router = app();

        let (status, _) = send(&router, Method::GET, "/api/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_mistyped_body_is_rejected() {
        let router = app();

        let (status, _) = send(
            &router,
            Method::POST,
            "/api",
            Some(json!({ "name": "Alice", "age": "thirty", "city": "Paris" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_health() {
        let router = app();

        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    struct UnreachableRepository;

    #[async_trait]
    impl RecordRepository for UnreachableRepository {
        async fn find_all(&self) -> crate::repository::Result<Vec<Record>> {
            Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn find_by_id(&self, _id: i64) -> crate::repository::Result<Option<Record>> {
            Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn save(&self, _record: Record) -> crate::repository::Result<Record> {
            Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn delete_by_id(&self, _id: i64) -> crate::repository::Result<bool> {
            Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        let service = RecordService::new(Arc::new(UnreachableRepository));
        let router = create_router(AppState::new(service));

        let (status, body) = send(&router, Method::GET, "/api", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));

        let (status, _) = send(&router, Method::GET, "/api/1", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
