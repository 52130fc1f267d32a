use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReviewDto {
    pub id: Uuid,
    pub vehicle_code: String,
    pub reviewer_name: String,
    pub body: String,
    pub stars: i16,
    pub date: NaiveDate,
    pub booking_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateReviewDto {
    /// Vehicle row id; the review is stored under the vehicle's external code.
    pub vehicle_id: Option<Uuid>,
    pub body: Option<String>,
    pub stars: Option<i16>,
    pub booking_id: Option<Uuid>,
}

/// Result of the pre-flight eligibility check for reviewing a booking.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ReviewEligibilityDto {
    pub can_review: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_code: Option<String>,
}
