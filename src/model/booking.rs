use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::vehicle::VehicleDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateBookingDto {
    pub vehicle_id: Option<Uuid>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub pickup_date: Option<DateTime<Utc>>,
    pub dropoff_date: Option<DateTime<Utc>>,
    pub total_price: Option<f64>,
    /// Initial status; defaults to `"confirmed"` when omitted.
    pub status: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BookingDto {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub user_id: Uuid,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: DateTime<Utc>,
    pub dropoff_date: DateTime<Utc>,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking joined with the vehicle snapshot, as returned by the user listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UserBookingDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub vehicle: VehicleDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateBookingStatusDto {
    pub status: Option<String>,
}
