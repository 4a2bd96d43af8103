//! Data Transfer Objects for the HTTP API
//!
//! DTOs carry the caller-supplied part of an entity. Server-owned fields
//! such as the generated id never appear here.

pub mod record;
