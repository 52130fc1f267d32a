use crate::server::{data::booking::BookingRepository, model::booking::CreateBookingParams};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod expired;
mod list_for_user;
mod overlap;
mod transition;

fn params(vehicle_id: uuid::Uuid, status: BookingStatus) -> CreateBookingParams {
    CreateBookingParams {
        vehicle_id,
        pickup_location: "Mannheim".to_string(),
        dropoff_location: "Berlin".to_string(),
        pickup_date: Utc::now() + Duration::days(1),
        dropoff_date: Utc::now() + Duration::days(3),
        total_price: 178.0,
        status,
    }
}
