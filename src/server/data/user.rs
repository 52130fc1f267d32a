//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. Lookup
//! methods return entity models because the authentication service needs the stored
//! password hash; conversion to the credential-free domain model happens in the
//! services.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use uuid::Uuid;

use crate::server::model::user::CreateUserParams;

/// Repository providing database operations for account management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account with a fresh id.
    ///
    /// The caller is responsible for lowercasing the email and hashing the
    /// password beforehand.
    ///
    /// # Arguments
    /// - `param` - Email and password hash for the new account
    ///
    /// # Returns
    /// - `Ok(Model)` - The created account row
    /// - `Err(DbErr)` - Database error during insert (including duplicate email)
    pub async fn create(&self, param: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Finds an account by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds an account by its (lowercase) email address.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an email is already registered.
    ///
    /// # Returns
    /// - `Ok(true)` - An account with this email exists
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the stored password hash and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(())` - Hash updated (or no matching account)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces the account email and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(())` - Email updated (or no matching account)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update_email(&self, id: Uuid, email: &str) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Email,
                sea_orm::sea_query::Expr::value(email),
            )
            .col_expr(
                entity::user::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
