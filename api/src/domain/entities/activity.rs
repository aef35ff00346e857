//! Activity envelope
//!
//! The upstream records are carried as raw JSON objects. The service never
//! reshapes them, so every upstream field reaches the caller under its
//! original name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Repository metadata (`GET /repos/{owner}/{repo}`)
pub type RepositorySummary = Map<String, Value>;

/// One entry of the commit list, most recent first
pub type CommitRecord = Map<String, Value>;

/// One entry of the contributor list, ordered by contribution count
pub type ContributorRecord = Map<String, Value>;

/// Language name to byte count
pub type LanguageBreakdown = Map<String, Value>;

/// Combined activity for one repository.
///
/// Only ever built once all four upstream lookups have succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEnvelope {
    pub repo: RepositorySummary,
    pub commits: Vec<CommitRecord>,
    pub contributors: Vec<ContributorRecord>,
    pub languages: LanguageBreakdown,
}
