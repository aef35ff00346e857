//! Repository activity handler

use axum::{
    extract::{Path, State},
    Json,
};

use crate::domain::entities::ActivityEnvelope;
use crate::error::AppError;
use crate::AppState;

/// GET /api/repo/:owner/:repo
///
/// Returns `{repo, commits, contributors, languages}` for the repository, or
/// 500 with a generic error body if any upstream lookup fails.
pub async fn get_repository_activity(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Result<Json<ActivityEnvelope>, AppError> {
    let envelope = state
        .activity_service
        .get_repository_activity(&owner, &repo)
        .await?;

    Ok(Json(envelope))
}
