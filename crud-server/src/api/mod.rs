//! API Module
//!
//! HTTP API layer for the server.
//! Handlers receive the record service through router state.

pub mod error;
pub mod health;
pub mod record;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::service::RecordService;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub records: RecordService,
}

impl AppState {
    pub fn new(records: RecordService) -> Self {
        Self { records }
    }
}

/// Create the main API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Record endpoints
        .route("/api", get(record::list_records).post(record::create_record))
        .route(
            "/api/{id}",
            get(record::get_record)
                .put(record::update_record)
                .delete(record::delete_record),
        )
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
