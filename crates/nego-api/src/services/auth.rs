//! Registration, login, and token resolution.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use nego_models::{LoginRequest, RegisterRequest, TokenResponse, User};
use nego_store::{Store, StoreError};

use crate::auth::{hash_password, verify_password, TokenKeys};
use crate::error::{ApiError, ApiResult};

/// Auth service.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn Store>,
    keys: Arc<TokenKeys>,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, keys: Arc<TokenKeys>) -> Self {
        Self { store, keys }
    }

    /// Register a new account and issue a session token.
    ///
    /// Email matching is case-sensitive exact; no normalization is applied.
    pub async fn register(&self, request: RegisterRequest) -> ApiResult<TokenResponse> {
        request.validate()?;

        if self.store.user_by_email(&request.email).await?.is_some() {
            return Err(ApiError::DuplicateEmail);
        }

        let digest = hash_password(&request.password)?;
        let user = User::new(request.email, request.name, digest);

        // The store enforces email uniqueness at write time, which closes
        // the window between the lookup above and this insert.
        match self.store.insert_user(user.clone()).await {
            Ok(()) => {}
            Err(StoreError::DuplicateKey(_)) => return Err(ApiError::DuplicateEmail),
            Err(e) => return Err(e.into()),
        }

        info!(user_id = %user.id, "registered user");
        let token = self.keys.issue(&user.id)?;
        Ok(TokenResponse::bearer(token, &user))
    }

    /// Authenticate with email and password.
    ///
    /// Unknown email and wrong password produce the same error, so callers
    /// cannot enumerate accounts.
    pub async fn login(&self, request: LoginRequest) -> ApiResult<TokenResponse> {
        let user = self
            .store
            .user_by_email(&request.email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !verify_password(&request.password, &user.hashed_password) {
            return Err(ApiError::InvalidCredentials);
        }

        info!(user_id = %user.id, "user logged in");
        let token = self.keys.issue(&user.id)?;
        Ok(TokenResponse::bearer(token, &user))
    }

    /// Resolve a bearer token to the stored user it was issued for.
    pub async fn current_user(&self, token: &str) -> ApiResult<User> {
        let claims = self.keys.verify(token)?;
        self.store
            .user_by_id(&claims.sub)
            .await?
            .ok_or_else(|| ApiError::unauthorized("User not found"))
    }
}
