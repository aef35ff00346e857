//! Repository Activity API
//!
//! Aggregates a repository's metadata, recent commits, top contributors and
//! language breakdown from the GitHub API into one JSON response.
//! Uses hexagonal (ports & adapters) architecture: the upstream sits behind
//! the `HostingClient` port.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{http::HeaderValue, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;



use adapters::GitHubClientImpl;
use app::ActivityService;
use config::{AllowedOrigins, Config};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub activity_service: Arc<ActivityService<GitHubClientImpl>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::from(Any),
        AllowedOrigins::List(list) => AllowOrigin::list(
            list.iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        ),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the HTTP router
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/repo/:owner/:repo",
            get(handlers::get_repository_activity),
        )
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,repo_activity_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting repository activity API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Upstream API: {}", config.github_api_url);

    let github = Arc::new(GitHubClientImpl::new(&config).context("Failed to build GitHub client")?);
    let activity_service = Arc::new(ActivityService::new(github));

    let state = AppState { activity_service };
    let app = build_router(state, &config);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
