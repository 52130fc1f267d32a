use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::vehicle::{VehicleDetailsDto, VehicleDto},
    server::{
        error::AppError,
        model::{review::Review, vehicle::VehicleFilter},
        service::vehicle::VehicleService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct VehicleQuery {
    pub brand: Option<String>,
    pub vehicle_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub location: Option<String>,
    pub availability: Option<bool>,
    pub electric: Option<bool>,
    pub gear_type: Option<String>,
    pub seats: Option<i32>,
    pub luggage: Option<i32>,
}

/// GET /api/vehicles
/// Search the catalog, cheapest first
pub async fn search_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = VehicleFilter {
        brand: query.brand,
        vehicle_type: query.vehicle_type,
        min_price: query.min_price,
        max_price: query.max_price,
        location: query.location,
        availability: query.availability,
        electric: query.electric,
        gear_type: query.gear_type,
        min_seats: query.seats,
        min_luggage: query.luggage,
    };

    let vehicles = VehicleService::new(&state.db).search(&filter).await?;
    let dtos: Vec<VehicleDto> = vehicles.into_iter().map(|vehicle| vehicle.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/vehicles/{id}
/// Catalog row with reviews and decoded branch cities
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let details = VehicleService::new(&state.db)
        .details(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

    let dto = VehicleDetailsDto {
        vehicle: details.vehicle.into_dto(),
        reviews: details.reviews.into_iter().map(Review::into_dto).collect(),
        location_coordinates: details.coordinates.into_iter().map(Into::into).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}
