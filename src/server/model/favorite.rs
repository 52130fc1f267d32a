//! Favorite domain model.

use chrono::{DateTime, Utc};

use crate::{model::favorite::FavoriteVehicleDto, server::model::vehicle::Vehicle};

/// A favorited vehicle together with when it was bookmarked.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteVehicle {
    pub vehicle: Vehicle,
    pub favorited_at: DateTime<Utc>,
}

impl FavoriteVehicle {
    pub fn into_dto(self) -> FavoriteVehicleDto {
        FavoriteVehicleDto {
            vehicle: self.vehicle.into_dto(),
            favorited_at: self.favorited_at,
        }
    }
}
