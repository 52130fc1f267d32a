//! Favorite factory for creating user/vehicle bookmarks.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a favorite linking the user to the vehicle.
///
/// # Returns
/// - `Ok(entity::favorite::Model)` - Created favorite entity
/// - `Err(DbErr)` - Database error during insert (including duplicate pairs)
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: Uuid,
    vehicle_id: Uuid,
) -> Result<entity::favorite::Model, DbErr> {
    entity::favorite::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
