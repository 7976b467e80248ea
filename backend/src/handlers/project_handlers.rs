use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sarvian_common::{Project, ProjectSlug, ProjectSummary};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::AppState;

/// The listing never fails: a broken content store yields an empty grid.
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ProjectSummary>> {
    match state.content.list_projects().await {
        Ok(projects) => {
            info!("Fetched {} projects", projects.len());
            Json(projects)
        }
        Err(e) => {
            error!("Failed to fetch projects: {}", e);
            Json(Vec::new())
        }
    }
}

pub async fn list_slugs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProjectSlug>>, (StatusCode, Json<Value>)> {
    state.content.project_slugs().await.map(Json).map_err(|e| {
        error!("Failed to fetch project slugs: {}", e);
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({"error": "content store unavailable"})),
        )
    })
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, (StatusCode, Json<Value>)> {
    match state.content.project_by_slug(slug.clone()).await {
        Ok(Some(project)) => Ok(Json(project)),
        Ok(None) => {
            info!("No project with slug {}", slug);
            Err((StatusCode::NOT_FOUND, Json(json!({"error": "not found"}))))
        }
        Err(e) => {
            error!("Failed to fetch project {}: {}", slug, e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({"error": "content store unavailable"})),
            ))
        }
    }
}
