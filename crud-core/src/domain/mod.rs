//! Core domain types
//!
//! These types represent the persisted entities and are shared between
//! the server (for persistence) and the client (for display).

pub mod record;
