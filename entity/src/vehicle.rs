use sea_orm::entity::prelude::*;

/// Catalog row for a rentable vehicle.
///
/// `colors` and `locations` are JSON arrays of strings. A location entry encodes
/// a branch city as `"CityName (lat,lng)"` or a bare `"CityName"`; decoding lives
/// in the server's location util, not here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// External catalog code (e.g. "V061"); reviews reference vehicles by it.
    #[sea_orm(unique)]
    pub code: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub vehicle_type: String,
    pub colors: Json,
    pub locations: Json,
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
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
