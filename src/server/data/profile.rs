//! Profile data repository.
//!
//! Profiles share their user's id, so every operation here is keyed by the
//! account id. Partial updates only touch fields that were provided, leaving
//! everything else at its stored value.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};
use uuid::Uuid;

use crate::server::model::profile::UpdateProfileParams;

pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the profile row created alongside a new account.
    ///
    /// # Arguments
    /// - `user_id` - Account id, also the profile's primary key
    /// - `email` - Account email (kept denormalized on the profile)
    /// - `full_name` - Optional display name captured at registration
    pub async fn create(
        &self,
        user_id: Uuid,
        email: String,
        full_name: Option<String>,
    ) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now();

        entity::profile::ActiveModel {
            id: ActiveValue::Set(user_id),
            email: ActiveValue::Set(email),
            full_name: ActiveValue::Set(full_name),
            last_name: ActiveValue::Set(None),
            phone_number: ActiveValue::Set(None),
            avatar_url: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            country_code: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            zip_code: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Applies a partial update; absent fields keep their stored values.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated profile
    /// - `Ok(None)` - No profile for that user id
    /// - `Err(DbErr)` - Database error during fetch or update
    pub async fn update(
        &self,
        user_id: Uuid,
        params: UpdateProfileParams,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let Some(profile) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut active: entity::profile::ActiveModel = profile.into();

        if let Some(full_name) = params.full_name {
            active.full_name = ActiveValue::Set(Some(full_name));
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(Some(last_name));
        }
        if let Some(phone_number) = params.phone_number {
            active.phone_number = ActiveValue::Set(Some(phone_number));
        }
        if let Some(avatar_url) = params.avatar_url {
            active.avatar_url = ActiveValue::Set(Some(avatar_url));
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(country_code) = params.country_code {
            active.country_code = ActiveValue::Set(Some(country_code));
        }
        if let Some(country) = params.country {
            active.country = ActiveValue::Set(Some(country));
        }
        if let Some(zip_code) = params.zip_code {
            active.zip_code = ActiveValue::Set(Some(zip_code));
        }
        if let Some(city) = params.city {
            active.city = ActiveValue::Set(Some(city));
        }
        if let Some(state) = params.state {
            active.state = ActiveValue::Set(Some(state));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }
}
