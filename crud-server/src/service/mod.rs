//! Service Module
//!
//! Business logic layer for the server.
//! Services sit between the HTTP handlers and the repositories.

pub mod record;

// Re-export for convenience
pub use record as record_service;
pub use record::RecordService;
