pub use sea_orm_migration::prelude::*;

mod m20250512_000001_create_user_table;
mod m20250512_000002_create_profile_table;
mod m20250512_000003_create_vehicle_table;
mod m20250512_000004_create_location_table;
mod m20250513_000005_create_booking_table;
mod m20250513_000006_create_review_table;
mod m20250514_000007_create_favorite_table;
mod m20250514_000008_create_password_reset_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250512_000001_create_user_table::Migration),
            Box::new(m20250512_000002_create_profile_table::Migration),
            Box::new(m20250512_000003_create_vehicle_table::Migration),
            Box::new(m20250512_000004_create_location_table::Migration),
            Box::new(m20250513_000005_create_booking_table::Migration),
            Box::new(m20250513_000006_create_review_table::Migration),
            Box::new(m20250514_000007_create_favorite_table::Migration),
            Box::new(m20250514_000008_create_password_reset_token_table::Migration),
        ]
    }
}
