//! The abstract storage gateway.

use async_trait::async_trait;

use nego_models::{PrivateContent, Talent, UnlockGrant, User};

use crate::error::StoreResult;

/// Filter for talent listings.
#[derive(Debug, Clone, Default)]
pub struct TalentFilter {
    /// Case-insensitive substring match on `location`.
    pub location: Option<String>,
    /// Exact match on `verified` when present.
    pub verified: Option<bool>,
}

impl TalentFilter {
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.verified.is_none()
    }

    /// Whether a record matches this filter.
    pub fn matches(&self, talent: &Talent) -> bool {
        if let Some(ref location) = self.location {
            if !talent
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }
        if let Some(verified) = self.verified {
            if talent.verified != verified {
                return false;
            }
        }
        true
    }
}

/// One page of a talent listing plus the total count of the filtered set.
#[derive(Debug, Clone)]
pub struct TalentPage {
    pub talents: Vec<Talent>,
    pub total: u64,
}

/// Result of the atomic unlock operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    /// Coins were debited and a grant recorded.
    Granted { remaining_coins: i64 },
    /// A grant already existed; nothing was debited.
    AlreadyUnlocked,
    /// Balance below the price; nothing was debited.
    InsufficientCoins { balance: i64 },
    /// The user record no longer exists.
    UserMissing,
}

/// Abstract interface to the document collections backing the service.
///
/// Records are keyed by application-assigned string ids, never by
/// database-generated ones. Every operation re-reads from storage; services
/// hold no cached copies across requests.
#[async_trait]
pub trait Store: Send + Sync {
    // Users

    /// Insert a new user. Fails with [`crate::StoreError::DuplicateKey`] when
    /// the email is already present (case-sensitive exact match).
    async fn insert_user(&self, user: User) -> StoreResult<()>;

    async fn user_by_id(&self, id: &str) -> StoreResult<Option<User>>;

    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    // Talents

    async fn insert_talent(&self, talent: Talent) -> StoreResult<()>;

    /// Bulk insert, used by seeding.
    async fn insert_talents(&self, talents: Vec<Talent>) -> StoreResult<()>;

    async fn talent_by_id(&self, id: &str) -> StoreResult<Option<Talent>>;

    /// Offset-based listing. `total` reflects the whole filtered set, not
    /// the returned page.
    async fn list_talents(
        &self,
        filter: &TalentFilter,
        skip: usize,
        limit: usize,
    ) -> StoreResult<TalentPage>;

    async fn count_talents(&self) -> StoreResult<u64>;

    /// Replace a talent record in full. Returns false when the id is absent.
    async fn replace_talent(&self, talent: Talent) -> StoreResult<bool>;

    /// Hard delete. Returns false when the id is absent.
    async fn delete_talent(&self, id: &str) -> StoreResult<bool>;

    // Private content

    async fn insert_content(&self, content: PrivateContent) -> StoreResult<()>;

    /// Bulk insert, used by seeding.
    async fn insert_contents(&self, contents: Vec<PrivateContent>) -> StoreResult<()>;

    async fn content_by_id(&self, id: &str) -> StoreResult<Option<PrivateContent>>;

    async fn list_content(&self, skip: usize, limit: usize) -> StoreResult<Vec<PrivateContent>>;

    /// Fetch exactly the records whose ids appear in `ids`, in store order.
    async fn content_by_ids(&self, ids: &[String]) -> StoreResult<Vec<PrivateContent>>;

    // Unlock grants

    async fn grants_for_user(&self, user_id: &str) -> StoreResult<Vec<UnlockGrant>>;

    /// Atomically unlock `content_id` for `user_id` at `price`: check for a
    /// prior grant, check the balance, debit, and record the grant as one
    /// serializable operation. Never check-then-act across calls.
    async fn unlock_content(
        &self,
        user_id: &str,
        content_id: &str,
        price: i64,
    ) -> StoreResult<UnlockOutcome>;
}
