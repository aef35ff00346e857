//! Activity service
//!
//! Looks up one repository's metadata, recent commits, top contributors and
//! language breakdown, and combines them into a single envelope.

use std::sync::Arc;

use crate::domain::entities::{ActivityEnvelope, RepositoryIdentifier};
use crate::domain::ports::HostingClient;
use crate::error::AppError;

/// Commits and contributors fetched per request
pub const PAGE_SIZE: u32 = 10;

/// Service that fans out to the hosting API and joins the results
pub struct ActivityService<HC>
where
    HC: HostingClient,
{
    hosting: Arc<HC>,
}

impl<HC> ActivityService<HC>
where
    HC: HostingClient,
{
    pub fn new(hosting: Arc<HC>) -> Self {
        Self { hosting }
    }

    /// Fetch the combined activity for `owner/name`.
    ///
    /// The four lookups run concurrently. The first failure fails the whole
    /// call and the remaining lookups are dropped; no partial envelope is
    /// ever produced.
    pub async fn get_repository_activity(
        &self,
        owner: &str,
        name: &str,
    ) -> Result<ActivityEnvelope, AppError> {
        let repo = RepositoryIdentifier::new(owner, name)?;
        tracing::debug!("Fetching activity for {}", repo);

        let (summary, commits, contributors, languages) = tokio::try_join!(
            self.hosting.get_repository(&repo),
            self.hosting.list_commits(&repo, PAGE_SIZE),
            self.hosting.list_contributors(&repo, PAGE_SIZE),
            self.hosting.get_languages(&repo),
        )?;

        Ok(ActivityEnvelope {
            repo: summary,
            commits,
            contributors,
            languages,
        })
    }
}
