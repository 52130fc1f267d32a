//! Vehicle domain model and search filter parameters.

use uuid::Uuid;

use crate::{
    model::vehicle::{CityPointDto, VehicleDto},
    server::util::location::CityPoint,
};

/// Catalog vehicle with decoded string arrays.
///
/// `locations` entries keep their wire form (`"City (lat,lng)"` or bare city);
/// decoding to coordinates happens on demand via the location util.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
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

impl Vehicle {
    /// Converts an entity model at the repository boundary, decoding the JSON
    /// string arrays. Non-string elements in stored arrays are dropped.
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            brand: entity.brand,
            model: entity.model,
            year: entity.year,
            vehicle_type: entity.vehicle_type,
            colors: string_array(&entity.colors),
            locations: string_array(&entity.locations),
            price_per_day: entity.price_per_day,
            availability: entity.availability,
            electric: entity.electric,
            image_url: entity.image_url,
            seats: entity.seats,
            luggage: entity.luggage,
            horsepower: entity.horsepower,
            ps: entity.ps,
            consumption: entity.consumption,
            fuel: entity.fuel,
            gear_type: entity.gear_type,
            featured: entity.featured,
            rating: entity.rating,
            discount: entity.discount,
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            code: self.code,
            brand: self.brand,
            model: self.model,
            year: self.year,
            vehicle_type: self.vehicle_type,
            colors: self.colors,
            locations: self.locations,
            price_per_day: self.price_per_day,
            availability: self.availability,
            electric: self.electric,
            image_url: self.image_url,
            seats: self.seats,
            luggage: self.luggage,
            horsepower: self.horsepower,
            ps: self.ps,
            consumption: self.consumption,
            fuel: self.fuel,
            gear_type: self.gear_type,
            featured: self.featured,
            rating: self.rating,
            discount: self.discount,
        }
    }
}

fn string_array(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

impl From<CityPoint> for CityPointDto {
    fn from(point: CityPoint) -> Self {
        Self {
            name: point.name,
            lat: point.lat,
            lng: point.lng,
        }
    }
}

/// Catalog search filter; every field is optional and absent fields match all.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    /// Case-insensitive substring match on brand.
    pub brand: Option<String>,
    /// Case-insensitive substring match on vehicle type.
    pub vehicle_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// City-name match against the decoded location entries.
    pub location: Option<String>,
    pub availability: Option<bool>,
    pub electric: Option<bool>,
    /// Exact gear type match.
    pub gear_type: Option<String>,
    pub min_seats: Option<i32>,
    pub min_luggage: Option<i32>,
}
