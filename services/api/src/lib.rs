//! Media catalog API service
//!
//! REST backend for the personal media catalog: credential routes, a JWT
//! authorization gate, owner-scoped media CRUD with poster uploads, and
//! static serving of the uploaded images.

pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod uploads;
pub mod validation;
