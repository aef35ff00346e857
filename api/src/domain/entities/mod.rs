//! Domain entities
//!
//! Everything here lives for a single request; nothing is cached or persisted.

pub mod activity;
pub mod repository;

pub use activity::{
    ActivityEnvelope, CommitRecord, ContributorRecord, LanguageBreakdown, RepositorySummary,
};
pub use repository::RepositoryIdentifier;
