//! Talent profile models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::serde_util::double_option;
use crate::FieldViolation;

/// A listed talent profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Talent {
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: String,
    pub starting_price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload. Field ranges mirror the stored invariants.
#[derive(Debug, Deserialize, Validate)]
pub struct TalentCreate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,
    pub image: String,
    #[validate(range(min = 0, message = "must be non-negative"))]
    pub starting_price: i64,
    #[validate(range(min = 18, max = 100, message = "must be between 18 and 100"))]
    pub age: Option<u32>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, max = 5.0, message = "must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[serde(default)]
    pub verified: bool,
}

impl TalentCreate {
    /// Build a stored record with a fresh id and both timestamps set to now.
    pub fn into_talent(self) -> Talent {
        let now = Utc::now();
        Talent {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            location: self.location,
            image: self.image,
            starting_price: self.starting_price,
            age: self.age,
            tagline: self.tagline,
            description: self.description,
            rating: self.rating,
            verified: self.verified,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial-update payload.
///
/// Nullable fields use `Option<Option<T>>` so that "field omitted" (leave
/// unchanged) and "field explicitly null" (clear it) are distinct.
#[derive(Debug, Default, Deserialize)]
pub struct TalentUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
    pub starting_price: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub age: Option<Option<u32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub tagline: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub rating: Option<Option<f64>>,
    pub verified: Option<bool>,
}

impl TalentUpdate {
    /// True when no field was supplied at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.image.is_none()
            && self.starting_price.is_none()
            && self.age.is_none()
            && self.tagline.is_none()
            && self.description.is_none()
            && self.rating.is_none()
            && self.verified.is_none()
    }

    /// Check the supplied values against the stored field invariants.
    pub fn validate(&self) -> Result<(), FieldViolation> {
        if let Some(price) = self.starting_price {
            if price < 0 {
                return Err(FieldViolation::new("starting_price", "must be non-negative"));
            }
        }
        if let Some(Some(age)) = self.age {
            if !(18..=100).contains(&age) {
                return Err(FieldViolation::new("age", "must be between 18 and 100"));
            }
        }
        if let Some(Some(rating)) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(FieldViolation::new("rating", "must be between 0 and 5"));
            }
        }
        Ok(())
    }

    /// Apply the supplied fields to a record. Timestamps are the caller's
    /// responsibility; an empty patch must not bump `updated_at`.
    pub fn apply_to(&self, talent: &mut Talent) {
        if let Some(ref name) = self.name {
            talent.name = name.clone();
        }
        if let Some(ref location) = self.location {
            talent.location = location.clone();
        }
        if let Some(ref image) = self.image {
            talent.image = image.clone();
        }
        if let Some(price) = self.starting_price {
            talent.starting_price = price;
        }
        if let Some(age) = self.age {
            talent.age = age;
        }
        if let Some(ref tagline) = self.tagline {
            talent.tagline = tagline.clone();
        }
        if let Some(ref description) = self.description {
            talent.description = description.clone();
        }
        if let Some(rating) = self.rating {
            talent.rating = rating;
        }
        if let Some(verified) = self.verified {
            talent.verified = verified;
        }
    }
}
