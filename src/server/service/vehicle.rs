//! Catalog search and detail assembly.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{review::ReviewRepository, vehicle::VehicleRepository},
    error::AppError,
    model::{
        review::Review,
        vehicle::{Vehicle, VehicleFilter},
    },
    util::location::{self, CityPoint},
};

/// Detail view of a catalog row: the vehicle, its reviews (keyed by external
/// code), and the branch cities decoded from its location entries.
#[derive(Debug, Clone)]
pub struct VehicleDetails {
    pub vehicle: Vehicle,
    pub reviews: Vec<Review>,
    pub coordinates: Vec<CityPoint>,
}

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches the catalog, cheapest first.
    ///
    /// SQL handles every criterion except the city filter, which matches the
    /// decoded location entries by city name (coordinates ignored, case
    /// insensitive).
    pub async fn search(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, AppError> {
        let mut vehicles: Vec<Vehicle> = VehicleRepository::new(self.db)
            .search(filter)
            .await?
            .into_iter()
            .map(Vehicle::from_entity)
            .collect();

        if let Some(city) = &filter.location {
            let key = location::city_key(city);
            vehicles.retain(|vehicle| {
                vehicle
                    .locations
                    .iter()
                    .any(|entry| location::city_key(entry) == key)
            });
        }

        Ok(vehicles)
    }

    /// Assembles the detail view for a vehicle row.
    ///
    /// # Returns
    /// - `Ok(Some(VehicleDetails))`: Vehicle found
    /// - `Ok(None)`: Unknown vehicle id
    pub async fn details(&self, id: Uuid) -> Result<Option<VehicleDetails>, AppError> {
        let Some(entity) = VehicleRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let reviews = ReviewRepository::new(self.db)
            .list_by_vehicle_code(&entity.code)
            .await?
            .into_iter()
            .map(Review::from_entity)
            .collect();

        let vehicle = Vehicle::from_entity(entity);
        let coordinates = location::extract_points(&vehicle.locations);

        Ok(Some(VehicleDetails {
            vehicle,
            reviews,
            coordinates,
        }))
    }
}
