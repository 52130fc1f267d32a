use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::vehicle::VehicleDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct FavoriteVehicleDto {
    #[serde(flatten)]
    pub vehicle: VehicleDto,
    pub favorited_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct FavoriteStatusDto {
    pub is_favorited: bool,
}
