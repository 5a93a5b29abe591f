//! API routes.

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::auth::{login, me, register};
use crate::handlers::content::{create_content, list_content, list_unlocked, unlock_content};
use crate::handlers::talents::{
    create_talent, delete_talent, get_talent, list_talents, update_talent,
};
use crate::handlers::{health, root, seed_database};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(me));

    let talent_routes = Router::new()
        .route("/talents", get(list_talents).post(create_talent))
        .route(
            "/talents/:talent_id",
            get(get_talent).patch(update_talent).delete(delete_talent),
        );

    let content_routes = Router::new()
        .route("/content", get(list_content).post(create_content))
        .route("/content/unlocked", get(list_unlocked))
        .route("/content/:content_id/unlock", post(unlock_content));

    let api_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/seed", post(seed_database))
        .merge(auth_routes)
        .merge(talent_routes)
        .merge(content_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
