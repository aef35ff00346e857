//! Repository Activity Viewer
//!
//! Serves a single page that looks up a repository through the activity API
//! and renders its summary card, language breakdown, top contributors and
//! recent commits.

mod client;
mod handlers;
mod models;
mod render;
mod session;

#[cfg(test)]
mod fixtures;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use client::AggregatorClient;
use session::ViewerSession;

/// Where the activity API is reached
const AGGREGATOR_URL: &str = "http://localhost:5000";

/// Where the page is served
const LISTEN_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,repo_activity_viewer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting repository activity viewer...");

    let client = Arc::new(AggregatorClient::new(AGGREGATOR_URL)?);
    let session = Arc::new(ViewerSession::new(client));

    let app = Router::new()
        .route("/", get(handlers::page::<AggregatorClient>))
        .layer(TraceLayer::new_for_http())
        .with_state(session);

    let addr = SocketAddr::from(LISTEN_ADDR);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Viewer running at http://{}", addr);
    tracing::info!("Using activity API at {}", AGGREGATOR_URL);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
