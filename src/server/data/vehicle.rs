//! Vehicle data repository.
//!
//! Generic over the connection so availability flips and relocations can run
//! inside booking transactions.

use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::vehicle::VehicleFilter;

pub struct VehicleRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Searches the catalog with the given filter, cheapest first.
    ///
    /// All SQL-expressible criteria are pushed into the query; the city filter
    /// runs on the decoded location entries in the service layer because the
    /// entries live inside a JSON array.
    ///
    /// # Arguments
    /// - `filter` - Optional criteria; absent fields match everything
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching vehicles ordered by price per day ascending
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, filter: &VehicleFilter) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        let mut query = entity::prelude::Vehicle::find();

        if let Some(brand) = &filter.brand {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::vehicle::Column::Brand)))
                    .like(format!("%{}%", brand.to_lowercase())),
            );
        }
        if let Some(vehicle_type) = &filter.vehicle_type {
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(entity::vehicle::Column::VehicleType)))
                    .like(format!("%{}%", vehicle_type.to_lowercase())),
            );
        }
        if let Some(min_price) = filter.min_price {
            query = query.filter(entity::vehicle::Column::PricePerDay.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(entity::vehicle::Column::PricePerDay.lte(max_price));
        }
        if let Some(availability) = filter.availability {
            query = query.filter(entity::vehicle::Column::Availability.eq(availability));
        }
        if let Some(electric) = filter.electric {
            query = query.filter(entity::vehicle::Column::Electric.eq(electric));
        }
        if let Some(gear_type) = &filter.gear_type {
            query = query.filter(entity::vehicle::Column::GearType.eq(gear_type));
        }
        if let Some(min_seats) = filter.min_seats {
            query = query.filter(entity::vehicle::Column::Seats.gte(min_seats));
        }
        if let Some(min_luggage) = filter.min_luggage {
            query = query.filter(entity::vehicle::Column::Luggage.gte(min_luggage));
        }

        query
            .order_by_asc(entity::vehicle::Column::PricePerDay)
            .all(self.conn)
            .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.conn).await
    }

    /// Flips the availability flag.
    ///
    /// # Returns
    /// - `Ok(())` - Flag updated (or no matching vehicle)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_availability(&self, id: Uuid, availability: bool) -> Result<(), DbErr> {
        entity::prelude::Vehicle::update_many()
            .filter(entity::vehicle::Column::Id.eq(id))
            .col_expr(
                entity::vehicle::Column::Availability,
                Expr::value(availability),
            )
            .exec(self.conn)
            .await?;
        Ok(())
    }

    /// Stores a new locations array and marks the vehicle available again.
    /// Used on drop-off when a completed booking relocates the vehicle.
    ///
    /// # Returns
    /// - `Ok(())` - Locations updated (or no matching vehicle)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn update_locations(&self, id: Uuid, locations: &[String]) -> Result<(), DbErr> {
        entity::prelude::Vehicle::update_many()
            .filter(entity::vehicle::Column::Id.eq(id))
            .col_expr(
                entity::vehicle::Column::Locations,
                Expr::value(serde_json::json!(locations)),
            )
            .col_expr(entity::vehicle::Column::Availability, Expr::value(true))
            .exec(self.conn)
            .await?;
        Ok(())
    }
}
