//! Booking factory for creating test reservations.

use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
/// use entity::booking::BookingStatus;
///
/// let booking = BookingFactory::new(&db, user.id, vehicle.id)
///     .status(BookingStatus::Confirmed)
///     .dropoff_date(Utc::now() - chrono::Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Uuid,
    vehicle_id: Uuid,
    pickup_location: String,
    dropoff_location: String,
    pickup_date: chrono::DateTime<Utc>,
    dropoff_date: chrono::DateTime<Utc>,
    total_price: f64,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - pickup: `"Mannheim"` tomorrow, dropoff: `"Berlin"` in three days
    /// - total_price: 267.0
    /// - status: `Confirmed`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owning user id
    /// - `vehicle_id` - Booked vehicle id
    pub fn new(db: &'a DatabaseConnection, user_id: Uuid, vehicle_id: Uuid) -> Self {
        Self {
            db,
            user_id,
            vehicle_id,
            pickup_location: "Mannheim".to_string(),
            dropoff_location: "Berlin".to_string(),
            pickup_date: Utc::now() + Duration::days(1),
            dropoff_date: Utc::now() + Duration::days(3),
            total_price: 267.0,
            status: BookingStatus::Confirmed,
        }
    }

    pub fn pickup_location(mut self, pickup_location: impl Into<String>) -> Self {
        self.pickup_location = pickup_location.into();
        self
    }

    pub fn dropoff_location(mut self, dropoff_location: impl Into<String>) -> Self {
        self.dropoff_location = dropoff_location.into();
        self
    }

    pub fn pickup_date(mut self, pickup_date: chrono::DateTime<Utc>) -> Self {
        self.pickup_date = pickup_date;
        self
    }

    pub fn dropoff_date(mut self, dropoff_date: chrono::DateTime<Utc>) -> Self {
        self.dropoff_date = dropoff_date;
        self
    }

    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            user_id: ActiveValue::Set(self.user_id),
            pickup_location: ActiveValue::Set(self.pickup_location),
            dropoff_location: ActiveValue::Set(self.dropoff_location),
            pickup_date: ActiveValue::Set(self.pickup_date),
            dropoff_date: ActiveValue::Set(self.dropoff_date),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the specified user and vehicle.
///
/// Shorthand for `BookingFactory::new(db, user_id, vehicle_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: Uuid,
    vehicle_id: Uuid,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, vehicle_id).build().await
}
