//! Password-reset token repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};
use uuid::Uuid;

pub struct PasswordResetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PasswordResetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a fresh single-use token for the user.
    pub async fn create(
        &self,
        user_id: Uuid,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::password_reset_token::Model, DbErr> {
        entity::password_reset_token::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token),
            expires_at: ActiveValue::Set(expires_at),
            used: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Finds a token that is neither used nor expired.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Token is valid as of `now`
    /// - `Ok(None)` - Unknown, used, or expired token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_valid(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::password_reset_token::Model>, DbErr> {
        entity::prelude::PasswordResetToken::find()
            .filter(entity::password_reset_token::Column::Token.eq(token))
            .filter(entity::password_reset_token::Column::Used.eq(false))
            .filter(entity::password_reset_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await
    }

    /// Marks a token consumed so it can never be replayed.
    pub async fn mark_used(&self, token: &str) -> Result<(), DbErr> {
        entity::prelude::PasswordResetToken::update_many()
            .filter(entity::password_reset_token::Column::Token.eq(token))
            .col_expr(entity::password_reset_token::Column::Used, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
