use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile joined with the account email.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ProfileDto {
    pub id: Uuid,
    pub email: String,
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

/// Partial update; absent fields keep their stored values.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct UpdateProfileDto {
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
    /// Also updates the account email when present.
    pub email: Option<String>,
}
