//! Shared data models for the Nego backend.
//!
//! This crate provides Serde-serializable types for:
//! - Users and auth payloads
//! - Talent profiles and partial updates
//! - Private content, unlock grants, and response views

pub mod content;
pub mod talent;
pub mod user;

mod serde_util;

// Re-export common types
pub use content::{ContentView, PrivateContent, PrivateContentCreate, UnlockGrant};
pub use talent::{Talent, TalentCreate, TalentUpdate};
pub use user::{LoginRequest, RegisterRequest, TokenResponse, User, UserResponse};

/// A field-level validation failure with the offending field named.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
