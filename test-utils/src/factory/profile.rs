//! Profile factory; profiles share their user's id.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test profiles with customizable fields.
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    email: String,
    full_name: Option<String>,
    last_name: Option<String>,
    avatar_url: Option<String>,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory for the given user.
    ///
    /// Defaults:
    /// - email: the provided email
    /// - full_name: `Some("Test")`
    /// - last_name: `Some("Renter")`
    /// - avatar_url: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            db,
            user_id,
            email: email.into(),
            full_name: Some("Test".to_string()),
            last_name: Some("Renter".to_string()),
            avatar_url: None,
        }
    }

    pub fn full_name(mut self, full_name: Option<String>) -> Self {
        self.full_name = full_name;
        self
    }

    pub fn last_name(mut self, last_name: Option<String>) -> Self {
        self.last_name = last_name;
        self
    }

    pub fn avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url;
        self
    }

    /// Builds and inserts the profile entity into the database.
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            id: ActiveValue::Set(self.user_id),
            email: ActiveValue::Set(self.email),
            full_name: ActiveValue::Set(self.full_name),
            last_name: ActiveValue::Set(self.last_name),
            phone_number: ActiveValue::Set(None),
            avatar_url: ActiveValue::Set(self.avatar_url),
            address: ActiveValue::Set(None),
            country_code: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            zip_code: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile for the user with default values.
pub async fn create_profile(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db, user.id, user.email.clone()).build().await
}
