//! User domain models and parameters.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::auth::{AccountDto, AuthUserDto};

/// An account holder, without credential material.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Stored lowercase.
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            email: self.email,
        }
    }
}

/// Account projection for `GET /api/auth/me`: user joined with its profile.
/// Profile fields are `None` when the profile row is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountOverview {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AccountOverview {
    pub fn from_entities(
        user: entity::user::Model,
        profile: Option<entity::profile::Model>,
    ) -> Self {
        let (full_name, last_name, phone_number, avatar_url, updated_at) = match profile {
            Some(profile) => (
                profile.full_name,
                profile.last_name,
                profile.phone_number,
                profile.avatar_url,
                Some(profile.updated_at),
            ),
            None => (None, None, None, None, None),
        };

        Self {
            id: user.id,
            email: user.email,
            full_name,
            last_name,
            phone_number,
            avatar_url,
            created_at: user.created_at,
            updated_at,
        }
    }

    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating an account; the password arrives already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
}
