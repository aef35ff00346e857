//! Page handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::client::ActivitySource;
use crate::render::render_page;
use crate::session::ViewerSession;

/// Search form fields; present only when the form was submitted
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub owner: Option<String>,
    pub repo: Option<String>,
}

/// GET /
///
/// Renders the current state. A form submission (`?owner=..&repo=..`) runs the
/// lookup first and renders its outcome.
pub async fn page<S>(
    State(session): State<Arc<ViewerSession<S>>>,
    Query(query): Query<SearchQuery>,
) -> Html<String>
where
    S: ActivitySource + 'static,
{
    if query.owner.is_some() || query.repo.is_some() {
        session
            .submit(
                query.owner.unwrap_or_default(),
                query.repo.unwrap_or_default(),
            )
            .await;
    }

    Html(render_page(&session.snapshot()))
}
