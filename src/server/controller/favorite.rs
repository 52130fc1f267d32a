use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::MessageDto,
        favorite::{FavoriteStatusDto, FavoriteVehicleDto},
    },
    server::{
        data::{favorite::FavoriteRepository, vehicle::VehicleRepository},
        error::AppError,
        middleware::auth::CurrentUser,
        model::{favorite::FavoriteVehicle, vehicle::Vehicle},
        state::AppState,
    },
};

/// GET /api/favorites
/// The caller's favorited vehicles, newest first
pub async fn get_favorites(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let rows = FavoriteRepository::new(&state.db)
        .list_with_vehicles(user.id)
        .await?;

    let dtos: Vec<FavoriteVehicleDto> = rows
        .into_iter()
        .filter_map(|(favorite, vehicle)| {
            vehicle.map(|vehicle| {
                FavoriteVehicle {
                    vehicle: Vehicle::from_entity(vehicle),
                    favorited_at: favorite.created_at,
                }
                .into_dto()
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/favorites/{vehicle_id}
/// Bookmark a vehicle
pub async fn add_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(vehicle_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if VehicleRepository::new(&state.db)
        .find_by_id(vehicle_id)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound("Vehicle not found".to_string()));
    }

    let favorites = FavoriteRepository::new(&state.db);
    if favorites.exists(user.id, vehicle_id).await? {
        return Err(AppError::BadRequest("Already in favorites".to_string()));
    }

    favorites.add(user.id, vehicle_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Added to favorites".to_string(),
        }),
    ))
}

/// DELETE /api/favorites/{vehicle_id}
/// Remove a bookmark
pub async fn remove_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(vehicle_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let removed = FavoriteRepository::new(&state.db)
        .remove(user.id, vehicle_id)
        .await?;

    if removed == 0 {
        return Err(AppError::NotFound("Favorite not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Removed from favorites".to_string(),
        }),
    ))
}

/// GET /api/favorites/check/{vehicle_id}
/// Whether the caller has bookmarked the vehicle
pub async fn check_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(vehicle_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let is_favorited = FavoriteRepository::new(&state.db)
        .exists(user.id, vehicle_id)
        .await?;

    Ok((StatusCode::OK, Json(FavoriteStatusDto { is_favorited })))
}
