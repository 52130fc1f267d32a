use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::review::ReviewDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct VehicleDto {
    pub id: Uuid,
    pub code: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: String,
    pub colors: Vec<String>,
    pub locations: Vec<String>,
    pub price_per_day: f64,
    pub availability: bool,
    pub electric: bool,
    pub image_url: Option<String>,
    pub seats: i32,
    pub luggage: i32,
    pub horsepower: Option<i32>,
    pub ps: Option<i32>,
    pub consumption: Option<String>,
    pub fuel: Option<String>,
    pub gear_type: Option<String>,
    pub featured: bool,
    pub rating: Option<f64>,
    pub discount: Option<f64>,
}

/// A branch city decoded from a vehicle's location strings.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CityPointDto {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Detail view: the catalog row plus its reviews and decoded branch cities.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct VehicleDetailsDto {
    #[serde(flatten)]
    pub vehicle: VehicleDto,
    pub reviews: Vec<ReviewDto>,
    pub location_coordinates: Vec<CityPointDto>,
}
