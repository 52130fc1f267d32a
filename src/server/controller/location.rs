use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::location::LocationDto,
    server::{data::location::LocationRepository, error::AppError, state::AppState},
};

fn to_dto(model: entity::location::Model) -> LocationDto {
    LocationDto {
        id: model.id,
        name: model.name,
        latitude: model.latitude,
        longitude: model.longitude,
    }
}

/// GET /api/locations
/// All branch cities, alphabetically
pub async fn get_locations(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let locations = LocationRepository::new(&state.db).all().await?;
    let dtos: Vec<LocationDto> = locations.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/locations/{id}
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let location = LocationRepository::new(&state.db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

    Ok((StatusCode::OK, Json(to_dto(location))))
}
