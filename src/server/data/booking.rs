//! Booking data repository.
//!
//! Generic over the connection so creation and status transitions can run
//! inside transactions together with the vehicle-side effects. Status changes
//! go through [`BookingRepository::transition`], a compare-and-swap on the
//! prior status: whichever writer wins the swap owns the side effects, which
//! is what keeps the expiry sweep idempotent.

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::booking::CreateBookingParams;

pub struct BookingRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new booking for the user.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the booking
    /// - `param` - Vehicle, locations, dates, price, and initial status
    ///
    /// # Returns
    /// - `Ok(Model)` - The created booking row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: Uuid,
        param: &CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            vehicle_id: ActiveValue::Set(param.vehicle_id),
            user_id: ActiveValue::Set(user_id),
            pickup_location: ActiveValue::Set(param.pickup_location.clone()),
            dropoff_location: ActiveValue::Set(param.dropoff_location.clone()),
            pickup_date: ActiveValue::Set(param.pickup_date),
            dropoff_date: ActiveValue::Set(param.dropoff_date),
            total_price: ActiveValue::Set(param.total_price),
            status: ActiveValue::Set(param.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.conn)
        .await
    }

    /// Finds a booking owned by the given user.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Booking found and owned by `user_id`
    /// - `Ok(None)` - No such booking for this user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_for_user(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::UserId.eq(user_id))
            .one(self.conn)
            .await
    }

    /// Finds an owned booking joined with its vehicle row.
    ///
    /// # Returns
    /// - `Ok(Some((booking, vehicle)))` - Booking found with its vehicle
    /// - `Ok(None)` - No such booking for this user
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_vehicle(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<(entity::booking::Model, entity::vehicle::Model)>, DbErr> {
        let result = entity::prelude::Booking::find()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Vehicle)
            .one(self.conn)
            .await?;

        Ok(result.and_then(|(booking, vehicle)| vehicle.map(|vehicle| (booking, vehicle))))
    }

    /// Lists a user's bookings with their vehicle snapshots, most recent
    /// pickup first.
    ///
    /// # Returns
    /// - `Ok(Vec<(booking, Option<vehicle>)>)` - Bookings ordered by pickup date descending
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_for_user_with_vehicles(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::vehicle::Model>)>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Vehicle)
            .order_by_desc(entity::booking::Column::PickupDate)
            .all(self.conn)
            .await
    }

    /// Checks whether a confirmed booking of the vehicle overlaps the given
    /// half-open interval `[pickup, dropoff)`.
    ///
    /// # Arguments
    /// - `vehicle_id` - Vehicle to check
    /// - `pickup` / `dropoff` - Candidate interval
    /// - `exclude` - Booking id to ignore (the booking being transitioned)
    ///
    /// # Returns
    /// - `Ok(true)` - At least one overlapping confirmed booking exists
    /// - `Ok(false)` - The interval is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has_overlapping_confirmed(
        &self,
        vehicle_id: Uuid,
        pickup: DateTime<Utc>,
        dropoff: DateTime<Utc>,
        exclude: Option<Uuid>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::VehicleId.eq(vehicle_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::PickupDate.lt(dropoff))
            .filter(entity::booking::Column::DropoffDate.gt(pickup));

        if let Some(exclude) = exclude {
            query = query.filter(entity::booking::Column::Id.ne(exclude));
        }

        let count = query.count(self.conn).await?;

        Ok(count > 0)
    }

    /// Compare-and-swap status transition.
    ///
    /// Updates the booking to `to` only while its current status is still one
    /// of `from`. The returned row count tells the caller whether it won the
    /// swap (1) or lost it to a concurrent writer (0); side effects must only
    /// run for the winner.
    ///
    /// # Returns
    /// - `Ok(rows_affected)` - 1 when the swap applied, 0 otherwise
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn transition(
        &self,
        id: Uuid,
        from: &[BookingStatus],
        to: BookingStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.is_in(from.iter().copied()))
            .col_expr(entity::booking::Column::Status, Expr::value(to))
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Lists confirmed bookings whose drop-off date has passed.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Sweep candidates
    /// - `Err(DbErr)` - Database error during query
    pub async fn expired_confirmed(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::DropoffDate.lt(now))
            .all(self.conn)
            .await
    }
}
