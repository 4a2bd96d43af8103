//! CRUD Core
//!
//! Core types shared by the CRUD server, client and CLI.
//!
//! This crate contains:
//! - Domain types: the persisted `Record` entity
//! - DTOs: request bodies exchanged over the HTTP API

pub mod domain;
pub mod dto;
