//! Axum HTTP API server for the Nego talent marketplace.
//!
//! This crate provides:
//! - REST endpoints for talents, private content, and email/password auth
//! - JWT bearer-token verification with argon2 password hashing
//! - Seed fixtures for first-run data

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{AuthService, ContentService, TalentService};
pub use state::AppState;
