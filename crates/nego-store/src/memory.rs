//! In-memory reference implementation of the storage gateway.
//!
//! Collections are plain vectors in insertion order, matching the unordered
//! scan a document store performs for unindexed queries. All mutation runs
//! under a single write lock, so the unlock transaction is serializable.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use nego_models::{PrivateContent, Talent, UnlockGrant, User};

use crate::error::{StoreError, StoreResult};
use crate::gateway::{Store, TalentFilter, TalentPage, UnlockOutcome};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    talents: Vec<Talent>,
    content: Vec<PrivateContent>,
    grants: Vec<UnlockGrant>,
}

/// In-memory store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, user: User) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateKey(format!(
                "users.email {}",
                user.email
            )));
        }
        debug!(user_id = %user.id, "inserting user");
        inner.users.push(user);
        Ok(())
    }

    async fn user_by_id(&self, id: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_talent(&self, talent: Talent) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.talents.push(talent);
        Ok(())
    }

    async fn insert_talents(&self, talents: Vec<Talent>) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.talents.extend(talents);
        Ok(())
    }

    async fn talent_by_id(&self, id: &str) -> StoreResult<Option<Talent>> {
        let inner = self.inner.read().await;
        Ok(inner.talents.iter().find(|t| t.id == id).cloned())
    }

    async fn list_talents(
        &self,
        filter: &TalentFilter,
        skip: usize,
        limit: usize,
    ) -> StoreResult<TalentPage> {
        let inner = self.inner.read().await;
        let matching: Vec<&Talent> = inner
            .talents
            .iter()
            .filter(|t| filter.matches(t))
            .collect();
        let total = matching.len() as u64;
        let talents = matching
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect();
        Ok(TalentPage { talents, total })
    }

    async fn count_talents(&self) -> StoreResult<u64> {
        let inner = self.inner.read().await;
        Ok(inner.talents.len() as u64)
    }

    async fn replace_talent(&self, talent: Talent) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.talents.iter_mut().find(|t| t.id == talent.id) {
            Some(slot) => {
                *slot = talent;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_talent(&self, id: &str) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.talents.len();
        inner.talents.retain(|t| t.id != id);
        Ok(inner.talents.len() < before)
    }

    async fn insert_content(&self, content: PrivateContent) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.content.push(content);
        Ok(())
    }

    async fn insert_contents(&self, contents: Vec<PrivateContent>) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.content.extend(contents);
        Ok(())
    }

    async fn content_by_id(&self, id: &str) -> StoreResult<Option<PrivateContent>> {
        let inner = self.inner.read().await;
        Ok(inner.content.iter().find(|c| c.id == id).cloned())
    }

    async fn list_content(&self, skip: usize, limit: usize) -> StoreResult<Vec<PrivateContent>> {
        let inner = self.inner.read().await;
        Ok(inner.content.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn content_by_ids(&self, ids: &[String]) -> StoreResult<Vec<PrivateContent>> {
        let inner = self.inner.read().await;
        Ok(inner
            .content
            .iter()
            .filter(|c| ids.iter().any(|id| *id == c.id))
            .cloned()
            .collect())
    }

    async fn grants_for_user(&self, user_id: &str) -> StoreResult<Vec<UnlockGrant>> {
        let inner = self.inner.read().await;
        Ok(inner
            .grants
            .iter()
            .filter(|g| g.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn unlock_content(
        &self,
        user_id: &str,
        content_id: &str,
        price: i64,
    ) -> StoreResult<UnlockOutcome> {
        // One write lock for the whole check-debit-grant sequence.
        let mut inner = self.inner.write().await;

        if inner
            .grants
            .iter()
            .any(|g| g.user_id == user_id && g.content_id == content_id)
        {
            return Ok(UnlockOutcome::AlreadyUnlocked);
        }

        let Some(user) = inner.users.iter_mut().find(|u| u.id == user_id) else {
            return Ok(UnlockOutcome::UserMissing);
        };

        if user.coins < price {
            return Ok(UnlockOutcome::InsufficientCoins {
                balance: user.coins,
            });
        }

        user.coins -= price;
        user.updated_at = Utc::now();
        let remaining = user.coins;
        inner.grants.push(UnlockGrant::new(user_id, content_id));

        debug!(user_id, content_id, price, remaining, "unlocked content");
        Ok(UnlockOutcome::Granted {
            remaining_coins: remaining,
        })
    }
}
