//! Booking domain models and parameters.

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use uuid::Uuid;

use crate::{
    model::booking::{BookingDto, UserBookingDto},
    server::model::vehicle::Vehicle,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: DateTime<Utc>,
    pub dropoff_date: DateTime<Utc>,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            user_id: entity.user_id,
            pickup_location: entity.pickup_location,
            dropoff_location: entity.dropoff_location,
            pickup_date: entity.pickup_date,
            dropoff_date: entity.dropoff_date,
            total_price: entity.total_price,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            user_id: self.user_id,
            pickup_location: self.pickup_location,
            dropoff_location: self.dropoff_location,
            pickup_date: self.pickup_date,
            dropoff_date: self.dropoff_date,
            total_price: self.total_price,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Booking joined with the vehicle snapshot at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithVehicle {
    pub booking: Booking,
    pub vehicle: Vehicle,
}

impl BookingWithVehicle {
    pub fn into_dto(self) -> UserBookingDto {
        UserBookingDto {
            booking: self.booking.into_dto(),
            vehicle: self.vehicle.into_dto(),
        }
    }
}

/// Parameters for creating a booking on behalf of the authenticated user.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub vehicle_id: Uuid,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: DateTime<Utc>,
    pub dropoff_date: DateTime<Utc>,
    pub total_price: f64,
    /// Initial status; only `Pending` and `Confirmed` are accepted here.
    pub status: BookingStatus,
}
