//! Private content listing and the coin-debit unlock transaction.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use nego_models::{ContentView, PrivateContentCreate};
use nego_store::{Store, UnlockOutcome};

use crate::error::{ApiError, ApiResult};

const MAX_PAGE_SIZE: usize = 100;

/// Content service.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn Store>,
}

impl ContentService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Locked previews for any viewer. Descriptions of locked records are
    /// suppressed; image URLs pass through untouched.
    pub async fn list_public(&self, skip: usize, limit: usize) -> ApiResult<Vec<ContentView>> {
        let limit = limit.min(MAX_PAGE_SIZE);
        let records = self.store.list_content(skip, limit).await?;
        Ok(records
            .iter()
            .map(|c| ContentView::render(c, false))
            .collect())
    }

    /// Everything the user has paid to unlock.
    pub async fn list_unlocked(&self, user_id: &str) -> ApiResult<Vec<ContentView>> {
        let grants = self.store.grants_for_user(user_id).await?;
        // Short-circuit before touching the content collection; an empty
        // id set must not turn into an unbounded "$in []" query.
        if grants.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = grants.into_iter().map(|g| g.content_id).collect();
        let records = self.store.content_by_ids(&ids).await?;
        Ok(records
            .iter()
            .map(|c| ContentView::render(c, true))
            .collect())
    }

    /// Unlock a record by debiting the viewer's coins.
    ///
    /// Re-unlocking is idempotent: an existing grant returns the unlocked
    /// view with no second debit. The debit and the grant are written by one
    /// atomic conditional store operation.
    pub async fn unlock(&self, user_id: &str, content_id: &str) -> ApiResult<ContentView> {
        let content = self
            .store
            .content_by_id(content_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Content not found"))?;

        match self
            .store
            .unlock_content(user_id, content_id, content.unlock_price)
            .await?
        {
            UnlockOutcome::Granted { remaining_coins } => {
                info!(
                    user_id,
                    content_id,
                    price = content.unlock_price,
                    remaining_coins,
                    "unlocked content"
                );
                Ok(ContentView::render(&content, true))
            }
            UnlockOutcome::AlreadyUnlocked => Ok(ContentView::render(&content, true)),
            UnlockOutcome::InsufficientCoins { balance } => Err(ApiError::InsufficientCoins {
                required: content.unlock_price,
                balance,
            }),
            UnlockOutcome::UserMissing => Err(ApiError::unauthorized("User not found")),
        }
    }

    /// Create a content record. Unauthenticated by design in the current
    /// product; see DESIGN.md.
    pub async fn create(&self, create: PrivateContentCreate) -> ApiResult<ContentView> {
        create.validate()?;
        let content = create.into_content();
        self.store.insert_content(content.clone()).await?;
        info!(content_id = %content.id, "created content");
        Ok(ContentView::render(&content, false))
    }
}
