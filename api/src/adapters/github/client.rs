//! GitHub API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::{
    CommitRecord, ContributorRecord, LanguageBreakdown, RepositoryIdentifier, RepositorySummary,
};
use crate::domain::ports::HostingClient;
use crate::error::UpstreamError;

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("repo-activity-api/", env!("CARGO_PKG_VERSION"));

/// Implementation of the hosting client against the GitHub REST API.
///
/// Requests are anonymous; tokens are out of scope.
pub struct GitHubClientImpl {
    http: Client,
    base_url: String,
}

impl GitHubClientImpl {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: config.github_api_url.trim_end_matches('/').to_string(),
        })
    }

    fn repo_url(&self, repo: &RepositoryIdentifier, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.base_url,
            encode(repo.owner()),
            encode(repo.name()),
            suffix
        )
    }

    async fn get_json<T: DeserializeOwned + Default>(
        &self,
        repo: &RepositoryIdentifier,
        url: &str,
    ) -> Result<T, UpstreamError> {
        tracing::debug!("GET {}", url);
        let resp = self.http.get(url).send().await?;
        tracing::debug!("GET {}: status {}", url, resp.status());

        self.handle_response(repo, resp).await
    }

    async fn handle_response<T: DeserializeOwned + Default>(
        &self,
        repo: &RepositoryIdentifier,
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            // Contributors of an empty repository come back as 204 with no body
            Ok(T::default())
        } else if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| UpstreamError::Deserialization(e.to_string()))
        } else if status == StatusCode::NOT_FOUND {
            Err(UpstreamError::RepoNotFound {
                owner: repo.owner().to_string(),
                repo: repo.name().to_string(),
            })
        } else if is_rate_limited(status, response.headers()) {
            Err(UpstreamError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// GitHub signals an exhausted quota with 429, or with 403 and a zero
/// `x-ratelimit-remaining`.
fn is_rate_limited(status: StatusCode, headers: &HeaderMap) -> bool {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return true;
    }

    status == StatusCode::FORBIDDEN
        && headers
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false)
}

#[async_trait]
impl HostingClient for GitHubClientImpl {
    async fn get_repository(
        &self,
        repo: &RepositoryIdentifier,
    ) -> Result<RepositorySummary, UpstreamError> {
        self.get_json(repo, &self.repo_url(repo, "")).await
    }

    async fn list_commits(
        &self,
        repo: &RepositoryIdentifier,
        limit: u32,
    ) -> Result<Vec<CommitRecord>, UpstreamError> {
        let url = self.repo_url(repo, &format!("/commits?per_page={}", limit));
        self.get_json(repo, &url).await
    }

    async fn list_contributors(
        &self,
        repo: &RepositoryIdentifier,
        limit: u32,
    ) -> Result<Vec<ContributorRecord>, UpstreamError> {
        let url = self.repo_url(repo, &format!("/contributors?per_page={}", limit));
        self.get_json(repo, &url).await
    }

    async fn get_languages(
        &self,
        repo: &RepositoryIdentifier,
    ) -> Result<LanguageBreakdown, UpstreamError> {
        self.get_json(repo, &self.repo_url(repo, "/languages")).await
    }
}
