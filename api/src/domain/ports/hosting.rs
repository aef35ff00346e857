//! Hosting client port trait
//!
//! Defines the read-only interface the activity service needs from the
//! source-hosting API.

use async_trait::async_trait;

use crate::domain::entities::{
    CommitRecord, ContributorRecord, LanguageBreakdown, RepositoryIdentifier, RepositorySummary,
};
use crate::error::UpstreamError;

/// Port trait for source-hosting API reads
#[async_trait]
pub trait HostingClient: Send + Sync {
    /// Fetch repository metadata
    async fn get_repository(
        &self,
        repo: &RepositoryIdentifier,
    ) -> Result<RepositorySummary, UpstreamError>;

    /// List the most recent commits on the default branch, newest first
    async fn list_commits(
        &self,
        repo: &RepositoryIdentifier,
        limit: u32,
    ) -> Result<Vec<CommitRecord>, UpstreamError>;

    /// List the top contributors by contribution count
    async fn list_contributors(
        &self,
        repo: &RepositoryIdentifier,
        limit: u32,
    ) -> Result<Vec<ContributorRecord>, UpstreamError>;

    /// Fetch bytes of code per language
    async fn get_languages(
        &self,
        repo: &RepositoryIdentifier,
    ) -> Result<LanguageBreakdown, UpstreamError>;
}
