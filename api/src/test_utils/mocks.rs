//! Mock implementations of port traits
//!
//! In-memory hosting client that serves fixtures and can be told to fail,
//! or to never answer, on any of the four endpoints.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use super::fixtures::{test_commits, test_contributors, test_languages, test_repository};
use super::Endpoint;
use crate::domain::entities::{
    CommitRecord, ContributorRecord, LanguageBreakdown, RepositoryIdentifier, RepositorySummary,
};
use crate::domain::ports::HostingClient;
use crate::error::UpstreamError;

pub struct MockHostingClient {
    repository: RepositorySummary,
    commits: Vec<CommitRecord>,
    contributors: Vec<ContributorRecord>,
    languages: LanguageBreakdown,
    failing: HashSet<Endpoint>,
    stalled: HashSet<Endpoint>,
    /// Every call made, with the page size where one applies
    pub calls: Arc<RwLock<Vec<(Endpoint, Option<u32>)>>>,
}

impl Default for MockHostingClient {
    fn default() -> Self {
        Self {
            repository: test_repository(),
            commits: test_commits(10),
            contributors: test_contributors(10),
            languages: test_languages(),
            failing: HashSet::new(),
            stalled: HashSet::new(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockHostingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commits(mut self, commits: Vec<CommitRecord>) -> Self {
        self.commits = commits;
        self
    }

    pub fn with_contributors(mut self, contributors: Vec<ContributorRecord>) -> Self {
        self.contributors = contributors;
        self
    }

    pub fn with_languages(mut self, languages: LanguageBreakdown) -> Self {
        self.languages = languages;
        self
    }

    /// Make `endpoint` return an API error
    pub fn failing_on(mut self, endpoint: Endpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    /// Make `endpoint` hang forever
    pub fn stalled_on(mut self, endpoint: Endpoint) -> Self {
        self.stalled.insert(endpoint);
        self
    }

    pub fn calls(&self) -> Vec<(Endpoint, Option<u32>)> {
        self.calls.read().unwrap().clone()
    }

    async fn respond<T>(
        &self,
        endpoint: Endpoint,
        limit: Option<u32>,
        value: T,
    ) -> Result<T, UpstreamError> {
        self.calls.write().unwrap().push((endpoint, limit));

        if self.stalled.contains(&endpoint) {
            std::future::pending::<()>().await;
        }

        if self.failing.contains(&endpoint) {
            return Err(UpstreamError::Api {
                status: 500,
                message: format!("Mock failure on {:?}", endpoint),
            });
        }

        Ok(value)
    }
}

#[async_trait]
impl HostingClient for MockHostingClient {
    async fn get_repository(
        &self,
        _repo: &RepositoryIdentifier,
    ) -> Result<RepositorySummary, UpstreamError> {
        self.respond(Endpoint::Repository, None, self.repository.clone())
            .await
    }

    async fn list_commits(
        &self,
        _repo: &RepositoryIdentifier,
        limit: u32,
    ) -> Result<Vec<CommitRecord>, UpstreamError> {
        let page = self.commits.iter().take(limit as usize).cloned().collect();
        self.respond(Endpoint::Commits, Some(limit), page).await
    }

    async fn list_contributors(
        &self,
        _repo: &RepositoryIdentifier,
        limit: u32,
    ) -> Result<Vec<ContributorRecord>, UpstreamError> {
        let page = self
            .contributors
            .iter()
            .take(limit as usize)
            .cloned()
            .collect();
        self.respond(Endpoint::Contributors, Some(limit), page)
            .await
    }

    async fn get_languages(
        &self,
        _repo: &RepositoryIdentifier,
    ) -> Result<LanguageBreakdown, UpstreamError> {
        self.respond(Endpoint::Languages, None, self.languages.clone())
            .await
    }
}
