//! Common library for the media catalog application
//!
//! This crate provides the shared infrastructure used by the API service:
//! database connectivity and the database error taxonomy.

pub mod database;
pub mod error;
