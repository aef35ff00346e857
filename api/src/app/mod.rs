//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod activity_service;

pub use activity_service::ActivityService;
