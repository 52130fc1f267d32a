//! Review data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists reviews for a vehicle by its external code, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Reviews ordered by review date, then creation time, descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_vehicle_code(
        &self,
        vehicle_code: &str,
    ) -> Result<Vec<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::VehicleCode.eq(vehicle_code))
            .order_by_desc(entity::review::Column::Date)
            .order_by_desc(entity::review::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Inserts a review dated today.
    ///
    /// # Arguments
    /// - `vehicle_code` - External code of the reviewed vehicle
    /// - `reviewer_name` - Display name resolved from the reviewer's profile
    /// - `body` / `stars` - Review content
    /// - `booking_id` - Completed booking this review documents, if any
    /// - `user_id` - Authenticated reviewer
    ///
    /// # Returns
    /// - `Ok(Model)` - The created review row
    /// - `Err(DbErr)` - Database error during insert (including a duplicate booking review)
    pub async fn create(
        &self,
        vehicle_code: String,
        reviewer_name: String,
        body: String,
        stars: i16,
        booking_id: Option<Uuid>,
        user_id: Option<Uuid>,
    ) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();

        entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            vehicle_code: ActiveValue::Set(vehicle_code),
            reviewer_name: ActiveValue::Set(reviewer_name),
            body: ActiveValue::Set(body),
            stars: ActiveValue::Set(stars),
            date: ActiveValue::Set(now.date_naive()),
            booking_id: ActiveValue::Set(booking_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Finds the review attached to a booking, if one exists.
    pub async fn find_by_booking(
        &self,
        booking_id: Uuid,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find()
            .filter(entity::review::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await
    }
}
