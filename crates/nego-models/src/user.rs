//! User account models and auth payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A stored user account.
///
/// `coins` is only ever mutated by the unlock transaction; there is no
/// credit path in this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub hashed_password: String,
    pub is_premium: bool,
    pub coins: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with a fresh id, zero coins, and both
    /// timestamps set to now.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        hashed_password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
            hashed_password: hashed_password.into(),
            is_premium: false,
            coins: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Registration request body.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of a user, safe to return to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub is_premium: bool,
    pub coins: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            is_premium: user.is_premium,
            coins: user.coins,
            created_at: user.created_at,
        }
    }
}

/// Token issued on register/login.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user: &User) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user: user.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_with_zero_coins() {
        let user = User::new("a@example.com", "Ada", "argon2-digest");
        assert_eq!(user.coins, 0);
        assert!(!user.is_premium);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn user_response_omits_password_digest() {
        let user = User::new("a@example.com", "Ada", "argon2-digest");
        let view = UserResponse::from(&user);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("hashed_password").is_none());
        assert_eq!(json["email"], "a@example.com");
    }

    #[test]
    fn short_password_fails_validation() {
        let req = RegisterRequest {
            email: "a@example.com".to_string(),
            name: "Ada".to_string(),
            password: "12345".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
