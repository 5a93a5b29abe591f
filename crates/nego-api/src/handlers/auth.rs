//! Auth handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use nego_models::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::state::AppState;

/// Register a new user. 201 with token and user summary.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let response = state.auth.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let response = state.auth.login(request).await?;
    Ok(Json(response))
}

/// Current user profile.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}
