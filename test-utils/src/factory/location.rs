//! Location factory for the branch-city catalog.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a catalog location with a unique name.
pub async fn create_location(db: &DatabaseConnection) -> Result<entity::location::Model, DbErr> {
    create_named_location(db, format!("City {}", next_id())).await
}

/// Creates a catalog location with the given name and Mannheim coordinates.
pub async fn create_named_location(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::location::Model, DbErr> {
    entity::location::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        name: ActiveValue::Set(name.into()),
        latitude: ActiveValue::Set(Some(49.489)),
        longitude: ActiveValue::Set(Some(8.467)),
    }
    .insert(db)
    .await
}
