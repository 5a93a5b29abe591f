//! Application state.

use std::sync::Arc;

use nego_store::Store;

use crate::auth::TokenKeys;
use crate::config::ApiConfig;
use crate::services::{AuthService, ContentService, TalentService};

/// Shared application state.
///
/// The storage gateway is injected at construction; there is no ambient
/// global database handle.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<dyn Store>,
    pub auth: AuthService,
    pub talents: TalentService,
    pub content: ContentService,
}

impl AppState {
    /// Create new application state around a storage gateway.
    pub fn new(config: ApiConfig, store: Arc<dyn Store>) -> Self {
        let keys = Arc::new(TokenKeys::new(&config.jwt_secret, config.token_ttl_hours));
        let auth = AuthService::new(Arc::clone(&store), Arc::clone(&keys));
        let talents = TalentService::new(Arc::clone(&store));
        let content = ContentService::new(Arc::clone(&store));

        Self {
            config,
            store,
            auth,
            talents,
            content,
        }
    }
}
