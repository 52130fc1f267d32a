use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use entity::booking::BookingStatus;
use uuid::Uuid;

use crate::{
    model::booking::{CreateBookingDto, UpdateBookingStatusDto, UserBookingDto},
    server::{
        error::AppError,
        middleware::auth::CurrentUser,
        model::booking::CreateBookingParams,
        service::booking::BookingService,
        state::AppState,
    },
};

/// POST /api/bookings
/// Create a booking; confirmed bookings flip the vehicle unavailable
pub async fn create_booking(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let (
        Some(vehicle_id),
        Some(pickup_location),
        Some(dropoff_location),
        Some(pickup_date),
        Some(dropoff_date),
        Some(total_price),
    ) = (
        dto.vehicle_id,
        dto.pickup_location,
        dto.dropoff_location,
        dto.pickup_date,
        dto.dropoff_date,
        dto.total_price,
    )
    else {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    };

    let status = match dto.status.as_deref() {
        None => BookingStatus::Confirmed,
        Some(value) => BookingStatus::parse(value)
            .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?,
    };

    let booking = BookingService::new(&state.db)
        .create(
            user.id,
            CreateBookingParams {
                vehicle_id,
                pickup_location,
                dropoff_location,
                pickup_date,
                dropoff_date,
                total_price,
                status,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// GET /api/bookings/user/{user_id}
/// The caller's bookings with vehicle snapshots; sweeps expired bookings first
pub async fn get_user_bookings(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    user.require_self(user_id)?;

    let service = BookingService::new(&state.db);

    // Catch up on expired bookings before answering, so a user who opens
    // their booking list right after a drop-off date sees it completed.
    service.complete_expired(Utc::now()).await?;

    let bookings = service.list_for_user(user_id).await?;
    let dtos: Vec<UserBookingDto> = bookings
        .into_iter()
        .map(|booking| booking.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/bookings/{id}
/// One owned booking with its vehicle
pub async fn get_booking(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .get(id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// PATCH /api/bookings/{id}
/// Transition a booking's status (monotonic; terminal states are final)
pub async fn update_booking_status(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = dto
        .status
        .as_deref()
        .and_then(BookingStatus::parse)
        .ok_or_else(|| AppError::BadRequest("Invalid status".to_string()))?;

    let booking = BookingService::new(&state.db)
        .update_status(id, user.id, status)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
