//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod repos;

pub use repos::get_repository_activity;
