use std::env;

/// Port used when `PORT` is unset or unparsable
pub const DEFAULT_PORT: u16 = 5000;

/// Upstream used when `GITHUB_API_URL` is unset
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Browser origins allowed to call the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse `*` or a comma-separated list of origins.
    ///
    /// An empty value, one with no usable entries, or one containing `*`
    /// allows any origin.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return AllowedOrigins::Any;
        }

        let origins: Vec<String> = raw
            .split(',')
            .map(|o| o.trim().trim_end_matches('/'))
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the GitHub REST API (overridable for GitHub Enterprise or tests)
    pub github_api_url: String,
    pub allowed_origins: AllowedOrigins,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string()),
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| AllowedOrigins::parse(&v))
                .unwrap_or(AllowedOrigins::Any),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            allowed_origins: AllowedOrigins::Any,
        }
    }
}
