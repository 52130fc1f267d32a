//! Favorite data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

pub struct FavoriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a user's favorites joined with their vehicles, newest first.
    pub async fn list_with_vehicles(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(entity::favorite::Model, Option<entity::vehicle::Model>)>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Vehicle)
            .order_by_desc(entity::favorite::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Checks whether the user has favorited the vehicle.
    pub async fn exists(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::VehicleId.eq(vehicle_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a favorite; the unique (user, vehicle) index rejects duplicates.
    pub async fn add(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<entity::favorite::Model, DbErr> {
        entity::favorite::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Removes a favorite.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - 0 when the pair was not favorited
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn remove(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::VehicleId.eq(vehicle_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
