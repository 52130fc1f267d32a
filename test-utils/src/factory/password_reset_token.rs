//! Password-reset token factory.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating reset tokens with customizable expiry and used state.
pub struct ResetTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    token: String,
    expires_at: chrono::DateTime<Utc>,
    used: bool,
}

impl<'a> ResetTokenFactory<'a> {
    /// Creates a new ResetTokenFactory with default values.
    ///
    /// Defaults:
    /// - token: a fresh UUID string
    /// - expires_at: one hour from now
    /// - used: false
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            token: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::hours(1),
            used: false,
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn expires_at(mut self, expires_at: chrono::DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }

    /// Builds and inserts the token entity into the database.
    pub async fn build(self) -> Result<entity::password_reset_token::Model, DbErr> {
        entity::password_reset_token::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            token: ActiveValue::Set(self.token),
            expires_at: ActiveValue::Set(self.expires_at),
            used: ActiveValue::Set(self.used),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid, unused reset token for the user.
pub async fn create_reset_token(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<entity::password_reset_token::Model, DbErr> {
    ResetTokenFactory::new(db, user_id).build().await
}
