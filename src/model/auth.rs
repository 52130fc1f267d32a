use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body for `POST /api/auth/register`. Fields are optional so that missing
/// values surface as a 400 with the standard envelope instead of a decode error.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RegisterDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LoginDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AuthUserDto {
    pub id: Uuid,
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct RegisterResponseDto {
    pub message: String,
    pub token: String,
    pub user: AuthUserDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LoginResponseDto {
    pub token: String,
    pub user: AuthUserDto,
}

/// Account projection returned by `GET /api/auth/me` (users joined with profiles).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AccountDto {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ResetRequestDto {
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ResetPasswordDto {
    pub token: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdatePasswordDto {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}
