//! Talent profile CRUD.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use validator::Validate;

use nego_models::{Talent, TalentCreate, TalentUpdate};
use nego_store::{Store, TalentFilter, TalentPage};

use crate::error::{ApiError, ApiResult};

/// Defensive cap on page size; the HTTP layer accepts any `limit`.
const MAX_PAGE_SIZE: usize = 100;

/// Talent service.
#[derive(Clone)]
pub struct TalentService {
    store: Arc<dyn Store>,
}

impl TalentService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// List talents with optional filtering. The returned total counts the
    /// whole filtered set, not the page.
    pub async fn list(
        &self,
        skip: usize,
        limit: usize,
        location: Option<String>,
        verified: Option<bool>,
    ) -> ApiResult<TalentPage> {
        let filter = TalentFilter { location, verified };
        let limit = limit.min(MAX_PAGE_SIZE);
        Ok(self.store.list_talents(&filter, skip, limit).await?)
    }

    pub async fn get(&self, id: &str) -> ApiResult<Talent> {
        self.store
            .talent_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("Talent not found"))
    }

    pub async fn create(&self, create: TalentCreate) -> ApiResult<Talent> {
        create.validate()?;
        let talent = create.into_talent();
        self.store.insert_talent(talent.clone()).await?;
        info!(talent_id = %talent.id, "created talent");
        Ok(talent)
    }

    /// Apply a partial update. Only supplied fields change; an empty patch
    /// returns the unchanged record without bumping `updated_at`.
    pub async fn update(&self, id: &str, patch: TalentUpdate) -> ApiResult<Talent> {
        patch.validate()?;

        let mut talent = self.get(id).await?;
        if patch.is_empty() {
            return Ok(talent);
        }

        patch.apply_to(&mut talent);
        talent.updated_at = Utc::now();

        if !self.store.replace_talent(talent.clone()).await? {
            // Deleted between the read and the write.
            return Err(ApiError::not_found("Talent not found"));
        }
        Ok(talent)
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        if !self.store.delete_talent(id).await? {
            return Err(ApiError::not_found("Talent not found"));
        }
        info!(talent_id = %id, "deleted talent");
        Ok(())
    }
}
