//! HTTP client for the activity API

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use urlencoding::encode;

use crate::models::ActivityEnvelope;

/// Source of repository activity for the viewer
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn fetch_activity(&self, owner: &str, repo: &str) -> Result<ActivityEnvelope>;
}

/// HTTP client for communicating with the activity API
#[derive(Clone)]
pub struct AggregatorClient {
    client: reqwest::Client,
    base_url: String,
}

impl AggregatorClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn activity_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/api/repo/{}/{}",
            self.base_url,
            encode(owner),
            encode(repo)
        )
    }
}

#[async_trait]
impl ActivitySource for AggregatorClient {
    async fn fetch_activity(&self, owner: &str, repo: &str) -> Result<ActivityEnvelope> {
        let url = self.activity_url(owner, repo);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("API error ({}): {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to decode activity response")
    }
}
