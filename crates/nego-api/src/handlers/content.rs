//! Private content handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use nego_models::{ContentView, PrivateContentCreate};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::handlers::Pagination;
use crate::state::AppState;

/// Locked previews, no auth required.
pub async fn list_content(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> ApiResult<Json<Vec<ContentView>>> {
    Ok(Json(state.content.list_public(page.skip, page.limit).await?))
}

/// The current user's unlocked items.
pub async fn list_unlocked(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<ContentView>>> {
    Ok(Json(state.content.list_unlocked(&user.id).await?))
}

/// Unlock a record by spending coins.
pub async fn unlock_content(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(content_id): Path<String>,
) -> ApiResult<Json<ContentView>> {
    Ok(Json(state.content.unlock(&user.id, &content_id).await?))
}

/// Create a content record. 201 on success.
pub async fn create_content(
    State(state): State<AppState>,
    Json(create): Json<PrivateContentCreate>,
) -> ApiResult<(StatusCode, Json<ContentView>)> {
    let view = state.content.create(create).await?;
    Ok((StatusCode::CREATED, Json(view)))
}
