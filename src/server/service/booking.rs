//! Booking lifecycle: creation, status transitions, and the expiry sweep.
//!
//! Status transitions are monotonic. The allowed moves are
//! `pending -> confirmed | cancelled | completed` and
//! `confirmed -> cancelled | completed`; `cancelled` and `completed` are
//! terminal. Every transition runs as a compare-and-swap inside a transaction
//! together with its vehicle side effects, so a user request racing the expiry
//! sweep completes a booking exactly once.
//!
//! Confirmed bookings of one vehicle may not overlap in time. Intervals are
//! half-open `[pickup, dropoff)`; a violation is reported as a conflict.

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{booking::BookingRepository, vehicle::VehicleRepository},
    error::AppError,
    model::{
        booking::{Booking, BookingWithVehicle, CreateBookingParams},
        vehicle::Vehicle,
    },
    util::location,
};

const OVERLAP_CONFLICT: &str = "Vehicle is already booked for the selected dates";

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking for the user.
    ///
    /// The insert and the availability flip run in one transaction; for a
    /// confirmed booking the overlap check runs in the same transaction, so
    /// two concurrent checkouts of the same vehicle cannot both commit.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The created booking
    /// - `Err(AppError::BadRequest)`: Inverted date range or unsupported initial status
    /// - `Err(AppError::NotFound)`: Unknown vehicle
    /// - `Err(AppError::Conflict)`: Overlapping confirmed booking for this vehicle
    pub async fn create(
        &self,
        user_id: Uuid,
        params: CreateBookingParams,
    ) -> Result<Booking, AppError> {
        if params.dropoff_date <= params.pickup_date {
            return Err(AppError::BadRequest(
                "Drop-off date must be after pickup date".to_string(),
            ));
        }
        if !matches!(
            params.status,
            BookingStatus::Pending | BookingStatus::Confirmed
        ) {
            return Err(AppError::BadRequest(
                "Initial status must be pending or confirmed".to_string(),
            ));
        }

        // Surface unknown vehicles as 404 instead of a foreign key violation.
        if VehicleRepository::new(self.db)
            .find_by_id(params.vehicle_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Vehicle not found".to_string()));
        }

        let booking = self
            .db
            .transaction::<_, entity::booking::Model, AppError>(move |txn| {
                Box::pin(async move {
                    let bookings = BookingRepository::new(txn);

                    if params.status == BookingStatus::Confirmed {
                        let taken = bookings
                            .has_overlapping_confirmed(
                                params.vehicle_id,
                                params.pickup_date,
                                params.dropoff_date,
                                None,
                            )
                            .await?;
                        if taken {
                            return Err(AppError::Conflict(OVERLAP_CONFLICT.to_string()));
                        }
                    }

                    let booking = bookings.create(user_id, &params).await?;

                    if params.status == BookingStatus::Confirmed {
                        VehicleRepository::new(txn)
                            .set_availability(params.vehicle_id, false)
                            .await?;
                    }

                    Ok(booking)
                })
            })
            .await?;

        Ok(Booking::from_entity(booking))
    }

    /// Lists the user's bookings joined with their vehicle snapshots, most
    /// recent pickup first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<BookingWithVehicle>, AppError> {
        let rows = BookingRepository::new(self.db)
            .list_for_user_with_vehicles(user_id)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(booking, vehicle)| {
                vehicle.map(|vehicle| BookingWithVehicle {
                    booking: Booking::from_entity(booking),
                    vehicle: Vehicle::from_entity(vehicle),
                })
            })
            .collect())
    }

    /// Fetches one owned booking with its vehicle.
    pub async fn get(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<BookingWithVehicle>, AppError> {
        let row = BookingRepository::new(self.db)
            .find_with_vehicle(id, user_id)
            .await?;

        Ok(row.map(|(booking, vehicle)| BookingWithVehicle {
            booking: Booking::from_entity(booking),
            vehicle: Vehicle::from_entity(vehicle),
        }))
    }

    /// Applies a status transition with its vehicle side effects.
    ///
    /// Side effects per target status:
    /// - `confirmed`: overlap check, then availability := false
    /// - `cancelled`: availability := true
    /// - `completed`: availability := true and the vehicle's location entry
    ///   moves from the pickup city to the drop-off city
    ///
    /// The swap is guarded by the booking's prior status. Losing the race to a
    /// writer that reached the same target is treated as success without
    /// repeating side effects; losing it to any other writer is a conflict.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The booking after the transition
    /// - `Err(AppError::NotFound)`: No such booking for this user
    /// - `Err(AppError::BadRequest)`: Transition not allowed from the current status
    /// - `Err(AppError::Conflict)`: Overlap on confirm, or a lost concurrent race
    pub async fn update_status(
        &self,
        id: Uuid,
        user_id: Uuid,
        target: BookingStatus,
    ) -> Result<Booking, AppError> {
        let bookings = BookingRepository::new(self.db);

        let Some(current) = bookings.find_for_user(id, user_id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        let allowed_from: &'static [BookingStatus] = match target {
            BookingStatus::Confirmed => &[BookingStatus::Pending],
            BookingStatus::Cancelled | BookingStatus::Completed => {
                &[BookingStatus::Pending, BookingStatus::Confirmed]
            }
            BookingStatus::Pending => &[],
        };

        if !allowed_from.contains(&current.status) {
            return Err(AppError::BadRequest(format!(
                "Cannot change a {} booking to {}",
                current.status.as_str(),
                target.as_str()
            )));
        }

        let snapshot = current.clone();
        let won = self
            .db
            .transaction::<_, bool, AppError>(move |txn| {
                Box::pin(async move {
                    let bookings = BookingRepository::new(txn);

                    if target == BookingStatus::Confirmed {
                        let taken = bookings
                            .has_overlapping_confirmed(
                                snapshot.vehicle_id,
                                snapshot.pickup_date,
                                snapshot.dropoff_date,
                                Some(snapshot.id),
                            )
                            .await?;
                        if taken {
                            return Err(AppError::Conflict(OVERLAP_CONFLICT.to_string()));
                        }
                    }

                    let rows = bookings.transition(snapshot.id, allowed_from, target).await?;
                    if rows == 0 {
                        return Ok(false);
                    }

                    let vehicles = VehicleRepository::new(txn);
                    match target {
                        BookingStatus::Confirmed => {
                            vehicles.set_availability(snapshot.vehicle_id, false).await?
                        }
                        BookingStatus::Cancelled => {
                            vehicles.set_availability(snapshot.vehicle_id, true).await?
                        }
                        BookingStatus::Completed => relocate_vehicle(txn, &snapshot).await?,
                        BookingStatus::Pending => {}
                    }

                    Ok(true)
                })
            })
            .await?;

        let Some(refreshed) = bookings.find_for_user(id, user_id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };

        if !won && refreshed.status != target {
            return Err(AppError::Conflict(
                "Booking was updated concurrently".to_string(),
            ));
        }

        Ok(Booking::from_entity(refreshed))
    }

    /// Completes every confirmed booking whose drop-off date has passed.
    ///
    /// Each candidate is swapped `confirmed -> completed` in its own
    /// transaction; only the winning swap relocates the vehicle and restores
    /// availability. Running the sweep again (or concurrently) changes
    /// nothing further. Per-booking failures are logged and skipped so one
    /// bad row cannot stall the sweep.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of bookings this pass completed
    pub async fn complete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let candidates = BookingRepository::new(self.db).expired_confirmed(now).await?;

        let mut completed = 0;
        for booking in candidates {
            match self.complete_one(&booking).await {
                Ok(true) => {
                    completed += 1;
                    tracing::info!(
                        "Auto-completed booking {}, vehicle moved to {}",
                        booking.id,
                        booking.dropoff_location
                    );
                }
                Ok(false) => {}
                Err(e) => {
                    tracing::error!("Failed to complete expired booking {}: {}", booking.id, e)
                }
            }
        }

        Ok(completed)
    }

    async fn complete_one(&self, booking: &entity::booking::Model) -> Result<bool, AppError> {
        let snapshot = booking.clone();

        let won = self
            .db
            .transaction::<_, bool, AppError>(move |txn| {
                Box::pin(async move {
                    let rows = BookingRepository::new(txn)
                        .transition(
                            snapshot.id,
                            &[BookingStatus::Confirmed],
                            BookingStatus::Completed,
                        )
                        .await?;
                    if rows == 0 {
                        return Ok(false);
                    }

                    relocate_vehicle(txn, &snapshot).await?;

                    Ok(true)
                })
            })
            .await?;

        Ok(won)
    }
}

/// Moves the vehicle's location entry from the booking's pickup city to its
/// drop-off city and marks the vehicle available again.
async fn relocate_vehicle<C: ConnectionTrait>(
    conn: &C,
    booking: &entity::booking::Model,
) -> Result<(), AppError> {
    let vehicles = VehicleRepository::new(conn);

    let Some(vehicle) = vehicles.find_by_id(booking.vehicle_id).await? else {
        return Ok(());
    };

    let current = Vehicle::from_entity(vehicle);
    let moved = location::relocate(
        &current.locations,
        &booking.pickup_location,
        &booking.dropoff_location,
    );

    vehicles.update_locations(booking.vehicle_id, &moved).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    fn params_for(vehicle_id: Uuid, status: BookingStatus) -> CreateBookingParams {
        CreateBookingParams {
            vehicle_id,
            pickup_location: "Mannheim".to_string(),
            dropoff_location: "Berlin".to_string(),
            pickup_date: Utc::now() + Duration::days(1),
            dropoff_date: Utc::now() + Duration::days(3),
            total_price: 178.0,
            status,
        }
    }

    async fn vehicle_availability(
        db: &sea_orm::DatabaseConnection,
        id: Uuid,
    ) -> Result<bool, AppError> {
        Ok(VehicleRepository::new(db)
            .find_by_id(id)
            .await?
            .unwrap()
            .availability)
    }

    #[tokio::test]
    async fn create_confirmed_booking_flips_availability() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;

        let booking = BookingService::new(db)
            .create(user.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await?;

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.user_id, user.id);
        assert!(!vehicle_availability(db, vehicle.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn create_pending_booking_keeps_vehicle_available() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;

        BookingService::new(db)
            .create(user.id, params_for(vehicle.id, BookingStatus::Pending))
            .await?;

        assert!(vehicle_availability(db, vehicle.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_inverted_date_range() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;

        let mut params = params_for(vehicle.id, BookingStatus::Confirmed);
        params.dropoff_date = params.pickup_date - Duration::hours(1);

        let result = BookingService::new(db).create(user.id, params).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_unknown_vehicle() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;

        let result = BookingService::new(db)
            .create(user.id, params_for(Uuid::new_v4(), BookingStatus::Confirmed))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_overlapping_confirmed_booking() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let other = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = BookingService::new(db);

        service
            .create(user.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await?;

        // Same window, different user: the second checkout loses.
        let result = service
            .create(other.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    #[tokio::test]
    async fn create_allows_back_to_back_intervals() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = BookingService::new(db);

        let first = params_for(vehicle.id, BookingStatus::Confirmed);
        service.create(user.id, first.clone()).await?;

        // Half-open intervals: the next rental may start exactly at drop-off.
        let mut second = first.clone();
        second.pickup_date = first.dropoff_date;
        second.dropoff_date = first.dropoff_date + Duration::days(2);
        service.create(user.id, second).await?;

        Ok(())
    }

    #[tokio::test]
    async fn confirm_from_pending_flips_availability_and_checks_overlap() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = BookingService::new(db);

        let pending = service
            .create(user.id, params_for(vehicle.id, BookingStatus::Pending))
            .await?;

        let confirmed = service
            .update_status(pending.id, user.id, BookingStatus::Confirmed)
            .await?;

        assert_eq!(confirmed.status, BookingStatus::Confirmed);
        assert!(!vehicle_availability(db, vehicle.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn confirm_conflicts_with_existing_confirmed_overlap() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = BookingService::new(db);

        let pending = service
            .create(user.id, params_for(vehicle.id, BookingStatus::Pending))
            .await?;
        service
            .create(user.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await?;

        let result = service
            .update_status(pending.id, user.id, BookingStatus::Confirmed)
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    #[tokio::test]
    async fn cancel_restores_availability() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = BookingService::new(db);

        let booking = service
            .create(user.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await?;
        let cancelled = service
            .update_status(booking.id, user.id, BookingStatus::Cancelled)
            .await?;

        assert_eq!(cancelled.status, BookingStatus::Cancelled);
        assert!(vehicle_availability(db, vehicle.id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn complete_relocates_vehicle_to_dropoff_city() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::vehicle::VehicleFactory::new(db)
            .locations(vec!["Mannheim (49.489,8.467)".to_string()])
            .build()
            .await?;
        let service = BookingService::new(db);

        let booking = service
            .create(user.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await?;
        service
            .update_status(booking.id, user.id, BookingStatus::Completed)
            .await?;

        let stored = VehicleRepository::new(db).find_by_id(vehicle.id).await?.unwrap();
        let stored = Vehicle::from_entity(stored);
        assert!(stored.availability);
        assert_eq!(stored.locations, vec!["Berlin (52.52,13.405)".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn terminal_states_admit_no_transition() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = BookingService::new(db);

        let booking = service
            .create(user.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await?;
        service
            .update_status(booking.id, user.id, BookingStatus::Cancelled)
            .await?;

        for target in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
        ] {
            let result = service.update_status(booking.id, user.id, target).await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        Ok(())
    }

    #[tokio::test]
    async fn update_status_is_owner_scoped() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let stranger = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;
        let service = BookingService::new(db);

        let booking = service
            .create(user.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await?;

        let result = service
            .update_status(booking.id, stranger.id, BookingStatus::Cancelled)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn round_trip_listing_matches_vehicle_row() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::vehicle::VehicleFactory::new(db)
            .brand("Porsche")
            .model("911")
            .price_per_day(450.0)
            .build()
            .await?;
        let service = BookingService::new(db);

        let created = service
            .create(user.id, params_for(vehicle.id, BookingStatus::Confirmed))
            .await?;

        let listed = service.list_for_user(user.id).await?;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].booking.id, created.id);
        assert_eq!(listed[0].vehicle.id, vehicle.id);
        assert_eq!(listed[0].vehicle.brand, "Porsche");
        assert_eq!(listed[0].vehicle.price_per_day, 450.0);

        Ok(())
    }

    #[tokio::test]
    async fn sweep_completes_expired_bookings_idempotently() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::vehicle::VehicleFactory::new(db)
            .locations(vec!["Mannheim (49.489,8.467)".to_string()])
            .availability(false)
            .build()
            .await?;

        factory::booking::BookingFactory::new(db, user.id, vehicle.id)
            .status(BookingStatus::Confirmed)
            .pickup_date(Utc::now() - Duration::days(10))
            .dropoff_date(Utc::now() - Duration::days(3))
            .pickup_location("Mannheim")
            .dropoff_location("Hamburg")
            .build()
            .await?;

        let service = BookingService::new(db);
        let now = Utc::now();

        let first = service.complete_expired(now).await?;
        assert_eq!(first, 1);

        let stored = VehicleRepository::new(db).find_by_id(vehicle.id).await?.unwrap();
        let stored = Vehicle::from_entity(stored);
        assert!(stored.availability);
        assert_eq!(stored.locations, vec!["Hamburg (53.551,9.993)".to_string()]);

        // Second pass over the same data changes nothing.
        let second = service.complete_expired(now).await?;
        assert_eq!(second, 0);
        let unchanged = VehicleRepository::new(db).find_by_id(vehicle.id).await?.unwrap();
        assert_eq!(Vehicle::from_entity(unchanged).locations, stored.locations);

        Ok(())
    }

    #[tokio::test]
    async fn sweep_ignores_future_and_terminal_bookings() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::create_vehicle(db).await?;

        // Still running.
        factory::booking::BookingFactory::new(db, user.id, vehicle.id)
            .status(BookingStatus::Confirmed)
            .build()
            .await?;
        // Expired but already terminal.
        factory::booking::BookingFactory::new(db, user.id, vehicle.id)
            .status(BookingStatus::Cancelled)
            .pickup_date(Utc::now() - Duration::days(5))
            .dropoff_date(Utc::now() - Duration::days(2))
            .build()
            .await?;

        let completed = BookingService::new(db).complete_expired(Utc::now()).await?;

        assert_eq!(completed, 0);

        Ok(())
    }

    #[tokio::test]
    async fn sweep_and_user_update_complete_exactly_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::create_user(db).await?;
        let vehicle = factory::vehicle::VehicleFactory::new(db)
            .locations(vec!["Mannheim (49.489,8.467)".to_string()])
            .build()
            .await?;
        let service = BookingService::new(db);

        let booking = factory::booking::BookingFactory::new(db, user.id, vehicle.id)
            .status(BookingStatus::Confirmed)
            .pickup_date(Utc::now() - Duration::days(4))
            .dropoff_date(Utc::now() - Duration::days(1))
            .pickup_location("Mannheim")
            .dropoff_location("Berlin")
            .build()
            .await?;

        // The user completes the booking; the sweep arrives afterwards and
        // must treat it as already handled.
        service
            .update_status(booking.id, user.id, BookingStatus::Completed)
            .await?;
        let swept = service.complete_expired(Utc::now()).await?;

        assert_eq!(swept, 0);
        let stored = VehicleRepository::new(db).find_by_id(vehicle.id).await?.unwrap();
        assert_eq!(
            Vehicle::from_entity(stored).locations,
            vec!["Berlin (52.52,13.405)".to_string()]
        );

        Ok(())
    }
}
