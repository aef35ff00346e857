//! Domain layer
//!
//! Contains the request-scoped data model with no external dependencies.
//! - `entities`: repository identifier and the activity envelope
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
