//! Review factory for creating test vehicle reviews.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_code: String,
    reviewer_name: String,
    body: String,
    stars: i16,
    booking_id: Option<Uuid>,
    user_id: Option<Uuid>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - reviewer_name: `"Reviewer {id}"` where id is auto-incremented
    /// - body: a short praise line, stars: 5
    /// - booking_id / user_id: `None`
    pub fn new(db: &'a DatabaseConnection, vehicle_code: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            vehicle_code: vehicle_code.into(),
            reviewer_name: format!("Reviewer {}", id),
            body: "Great car, smooth ride.".to_string(),
            stars: 5,
            booking_id: None,
            user_id: None,
        }
    }

    pub fn reviewer_name(mut self, reviewer_name: impl Into<String>) -> Self {
        self.reviewer_name = reviewer_name.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn stars(mut self, stars: i16) -> Self {
        self.stars = stars;
        self
    }

    pub fn booking_id(mut self, booking_id: Option<Uuid>) -> Self {
        self.booking_id = booking_id;
        self
    }

    pub fn user_id(mut self, user_id: Option<Uuid>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();

        entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            vehicle_code: ActiveValue::Set(self.vehicle_code),
            reviewer_name: ActiveValue::Set(self.reviewer_name),
            body: ActiveValue::Set(self.body),
            stars: ActiveValue::Set(self.stars),
            date: ActiveValue::Set(now.date_naive()),
            booking_id: ActiveValue::Set(self.booking_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given vehicle code.
pub async fn create_review(
    db: &DatabaseConnection,
    vehicle_code: impl Into<String>,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, vehicle_code).build().await
}
