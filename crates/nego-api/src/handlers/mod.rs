//! HTTP handlers.

pub mod auth;
pub mod content;
pub mod talents;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiResult;
use crate::seed;
use crate::state::AppState;

/// Welcome response for the API root.
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
}

/// API root: liveness/welcome.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to Nego API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Seed response. Counts are omitted on the no-op path.
#[derive(Serialize)]
pub struct SeedResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talents: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talents_created: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_created: Option<usize>,
}

/// One-time fixture load. No-op when talents are already present.
pub async fn seed_database(State(state): State<AppState>) -> ApiResult<Json<SeedResponse>> {
    let existing = state.store.count_talents().await?;
    if existing > 0 {
        return Ok(Json(SeedResponse {
            message: "Database already seeded".to_string(),
            talents: Some(existing),
            talents_created: None,
            content_created: None,
        }));
    }

    let talents = seed::seed_talents();
    let content = seed::seed_content();
    let (talent_count, content_count) = (talents.len(), content.len());

    state.store.insert_talents(talents).await?;
    state.store.insert_contents(content).await?;

    info!(talent_count, content_count, "seeded database");
    Ok(Json(SeedResponse {
        message: "Database seeded successfully".to_string(),
        talents: None,
        talents_created: Some(talent_count),
        content_created: Some(content_count),
    }))
}

/// Pagination query parameters shared by list endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

pub(crate) fn default_limit() -> usize {
    20
}
