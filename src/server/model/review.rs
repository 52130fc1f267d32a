//! Review domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::model::review::{ReviewDto, ReviewEligibilityDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
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

impl Review {
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_code: entity.vehicle_code,
            reviewer_name: entity.reviewer_name,
            body: entity.body,
            stars: entity.stars,
            date: entity.date,
            booking_id: entity.booking_id,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            vehicle_code: self.vehicle_code,
            reviewer_name: self.reviewer_name,
            body: self.body,
            stars: self.stars,
            date: self.date,
            booking_id: self.booking_id,
            user_id: self.user_id,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a review against a vehicle row.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    pub vehicle_id: Uuid,
    pub body: String,
    pub stars: i16,
    pub booking_id: Option<Uuid>,
}

/// Outcome of the review eligibility pre-check for a booking.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewEligibility {
    /// The booking can be reviewed; carries the data the form needs.
    Eligible {
        booking_id: Uuid,
        vehicle_id: Uuid,
        vehicle_code: String,
    },
    /// The booking cannot be reviewed; `review_id` is set when a review
    /// already exists.
    Ineligible {
        reason: String,
        review_id: Option<Uuid>,
    },
}

impl ReviewEligibility {
    pub fn into_dto(self) -> ReviewEligibilityDto {
        match self {
            Self::Eligible {
                booking_id,
                vehicle_id,
                vehicle_code,
            } => ReviewEligibilityDto {
                can_review: true,
                reason: None,
                review_id: None,
                booking_id: Some(booking_id),
                vehicle_id: Some(vehicle_id),
                vehicle_code: Some(vehicle_code),
            },
            Self::Ineligible { reason, review_id } => ReviewEligibilityDto {
                can_review: false,
                reason: Some(reason),
                review_id,
                booking_id: None,
                vehicle_id: None,
                vehicle_code: None,
            },
        }
    }
}
