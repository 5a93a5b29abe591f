//! Private content, unlock grants, and the per-viewer response view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A stored private content record.
///
/// `is_locked` is a static flag on the record; the per-viewer lock state is
/// derived at response time by [`ContentView::render`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateContent {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_url: String,
    pub unlock_price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub talent_id: Option<String>,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

/// Creation payload.
#[derive(Debug, Deserialize, Validate)]
pub struct PrivateContentCreate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    #[validate(range(min = 0, message = "must be non-negative"))]
    pub unlock_price: i64,
    pub talent_id: Option<String>,
}

impl PrivateContentCreate {
    /// Build a stored record: fresh id, locked by default, created now.
    pub fn into_content(self) -> PrivateContent {
        PrivateContent {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            unlock_price: self.unlock_price,
            talent_id: self.talent_id,
            is_locked: true,
            created_at: Utc::now(),
        }
    }
}

/// Proof that a user paid to view a specific content record.
/// Unique on (user_id, content_id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockGrant {
    pub user_id: String,
    pub content_id: String,
    pub unlocked_at: DateTime<Utc>,
}

impl UnlockGrant {
    pub fn new(user_id: impl Into<String>, content_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            content_id: content_id.into(),
            unlocked_at: Utc::now(),
        }
    }
}

/// Per-viewer rendering of a content record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentView {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub unlock_price: i64,
    pub is_locked: bool,
    pub talent_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContentView {
    /// Render a record for a viewer.
    ///
    /// The description is visible iff the viewer unlocked the record or the
    /// stored flag is unlocked; the view's `is_locked` is the stored flag
    /// masked by the viewer's grant. The image URL is passed through as-is
    /// (any blurring is a presentation concern).
    pub fn render(content: &PrivateContent, user_unlocked: bool) -> Self {
        let description = if user_unlocked || !content.is_locked {
            content.description.clone()
        } else {
            None
        };
        Self {
            id: content.id.clone(),
            title: content.title.clone(),
            description,
            image_url: content.image_url.clone(),
            unlock_price: content.unlock_price,
            is_locked: content.is_locked && !user_unlocked,
            talent_id: content.talent_id.clone(),
            created_at: content.created_at,
        }
    }
}
