use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::review::{CreateReviewDto, ReviewDto},
    server::{
        error::AppError,
        middleware::auth::CurrentUser,
        model::review::{CreateReviewParams, Review},
        service::review::ReviewService,
        state::AppState,
    },
};

/// GET /api/reviews/vehicle/{code}
/// Reviews for a vehicle by its external code, newest first
pub async fn get_vehicle_reviews(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).list_for_vehicle(&code).await?;
    let dtos: Vec<ReviewDto> = reviews.into_iter().map(Review::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/reviews
/// Create a review; booking-backed reviews require an owned, completed,
/// vehicle-matching booking and at most one review per booking
pub async fn create_review(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(dto): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(vehicle_id), Some(body), Some(stars)) = (dto.vehicle_id, dto.body, dto.stars) else {
        return Err(AppError::BadRequest(
            "Missing required fields: vehicle_id, body, stars".to_string(),
        ));
    };

    let review = ReviewService::new(&state.db)
        .create(
            user.id,
            CreateReviewParams {
                vehicle_id,
                body,
                stars,
                booking_id: dto.booking_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// GET /api/reviews/booking/{booking_id}/check
/// Non-mutating eligibility check for reviewing a booking
pub async fn check_review_eligibility(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(booking_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let eligibility = ReviewService::new(&state.db)
        .eligibility(booking_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(eligibility.into_dto())))
}
