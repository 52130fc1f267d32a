//! Profile domain model and update parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::profile::ProfileDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub address: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            last_name: entity.last_name,
            phone_number: entity.phone_number,
            avatar_url: entity.avatar_url,
            address: entity.address,
            country_code: entity.country_code,
            country: entity.country,
            zip_code: entity.zip_code,
            city: entity.city,
            state: entity.state,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Joins the account email (from `users`) into the API projection.
    pub fn into_dto(self, email: String) -> ProfileDto {
        ProfileDto {
            id: self.id,
            email,
            full_name: self.full_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            avatar_url: self.avatar_url,
            address: self.address,
            country_code: self.country_code,
            country: self.country,
            zip_code: self.zip_code,
            city: self.city,
            state: self.state,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Partial profile update; `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub address: Option<String>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}
