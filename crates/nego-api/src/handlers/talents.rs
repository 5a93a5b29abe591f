//! Talent handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use nego_models::{Talent, TalentCreate, TalentUpdate};

use crate::error::ApiResult;
use crate::handlers::default_limit;
use crate::state::AppState;

/// Query parameters for the talent listing.
#[derive(Debug, Deserialize)]
pub struct TalentListQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub location: Option<String>,
    pub verified: Option<bool>,
}

/// One page of talents plus the filtered total.
#[derive(Serialize)]
pub struct TalentListResponse {
    pub talents: Vec<Talent>,
    pub total: u64,
}

/// List talents with optional location/verified filters.
pub async fn list_talents(
    State(state): State<AppState>,
    Query(query): Query<TalentListQuery>,
) -> ApiResult<Json<TalentListResponse>> {
    let page = state
        .talents
        .list(query.skip, query.limit, query.location, query.verified)
        .await?;
    Ok(Json(TalentListResponse {
        talents: page.talents,
        total: page.total,
    }))
}

/// Get a single talent by id.
pub async fn get_talent(
    State(state): State<AppState>,
    Path(talent_id): Path<String>,
) -> ApiResult<Json<Talent>> {
    Ok(Json(state.talents.get(&talent_id).await?))
}

/// Create a talent profile. 201 on success.
pub async fn create_talent(
    State(state): State<AppState>,
    Json(create): Json<TalentCreate>,
) -> ApiResult<(StatusCode, Json<Talent>)> {
    let talent = state.talents.create(create).await?;
    Ok((StatusCode::CREATED, Json(talent)))
}

/// Partially update a talent profile.
pub async fn update_talent(
    State(state): State<AppState>,
    Path(talent_id): Path<String>,
    Json(patch): Json<TalentUpdate>,
) -> ApiResult<Json<Talent>> {
    Ok(Json(state.talents.update(&talent_id, patch).await?))
}

/// Delete a talent profile. 204 on success.
pub async fn delete_talent(
    State(state): State<AppState>,
    Path(talent_id): Path<String>,
) -> ApiResult<StatusCode> {
    state.talents.delete(&talent_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
