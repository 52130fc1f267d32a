//! Vehicle factory for creating test catalog rows.
//!
//! Defaults describe an available sedan stationed in Mannheim; override fields
//! through the builder for search-filter and availability scenarios.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;
use uuid::Uuid;

/// Factory for creating test vehicles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vehicle::VehicleFactory;
///
/// let vehicle = VehicleFactory::new(&db)
///     .brand("Porsche")
///     .model("911")
///     .price_per_day(450.0)
///     .locations(vec!["Berlin (52.52,13.405)".to_string()])
///     .build()
///     .await?;
/// ```
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    brand: String,
    model: String,
    year: i32,
    vehicle_type: String,
    colors: Vec<String>,
    locations: Vec<String>,
    price_per_day: f64,
    availability: bool,
    electric: bool,
    seats: i32,
    luggage: i32,
    gear_type: Option<String>,
    featured: bool,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - code: `"V{id}"` where id is auto-incremented
    /// - brand/model: `"BMW"` / `"320i"`, year 2022, type `"Sedan"`
    /// - locations: `["Mannheim (49.489,8.467)"]`
    /// - price_per_day: 89.0, available, not electric, 5 seats, 3 luggage
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("V{:03}", id),
            brand: "BMW".to_string(),
            model: "320i".to_string(),
            year: 2022,
            vehicle_type: "Sedan".to_string(),
            colors: vec!["Black".to_string()],
            locations: vec!["Mannheim (49.489,8.467)".to_string()],
            price_per_day: 89.0,
            availability: true,
            electric: false,
            seats: 5,
            luggage: 3,
            gear_type: Some("Automatic".to_string()),
            featured: false,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn vehicle_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.vehicle_type = vehicle_type.into();
        self
    }

    pub fn locations(mut self, locations: Vec<String>) -> Self {
        self.locations = locations;
        self
    }

    pub fn price_per_day(mut self, price_per_day: f64) -> Self {
        self.price_per_day = price_per_day;
        self
    }

    pub fn availability(mut self, availability: bool) -> Self {
        self.availability = availability;
        self
    }

    pub fn electric(mut self, electric: bool) -> Self {
        self.electric = electric;
        self
    }

    pub fn seats(mut self, seats: i32) -> Self {
        self.seats = seats;
        self
    }

    pub fn luggage(mut self, luggage: i32) -> Self {
        self.luggage = luggage;
        self
    }

    pub fn gear_type(mut self, gear_type: Option<String>) -> Self {
        self.gear_type = gear_type;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            code: ActiveValue::Set(self.code),
            brand: ActiveValue::Set(self.brand),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(self.year),
            vehicle_type: ActiveValue::Set(self.vehicle_type),
            colors: ActiveValue::Set(json!(self.colors)),
            locations: ActiveValue::Set(json!(self.locations)),
            price_per_day: ActiveValue::Set(self.price_per_day),
            availability: ActiveValue::Set(self.availability),
            electric: ActiveValue::Set(self.electric),
            image_url: ActiveValue::Set(None),
            seats: ActiveValue::Set(self.seats),
            luggage: ActiveValue::Set(self.luggage),
            horsepower: ActiveValue::Set(Some(184)),
            ps: ActiveValue::Set(None),
            consumption: ActiveValue::Set(None),
            fuel: ActiveValue::Set(Some("Petrol".to_string())),
            gear_type: ActiveValue::Set(self.gear_type),
            featured: ActiveValue::Set(self.featured),
            rating: ActiveValue::Set(None),
            discount: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
