use super::*;

/// Tests creating a booking row.
///
/// Expected: Ok with all provided fields persisted and timestamps set.
#[tokio::test]
async fn creates_booking_with_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let repo = BookingRepository::new(db);
    let param = params(vehicle.id, BookingStatus::Confirmed);
    let booking = repo.create(user.id, &param).await?;

    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.vehicle_id, vehicle.id);
    assert_eq!(booking.pickup_location, "Mannheim");
    assert_eq!(booking.dropoff_location, "Berlin");
    assert_eq!(booking.total_price, 178.0);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.created_at, booking.updated_at);

    Ok(())
}

/// Tests that each created booking gets its own id.
#[tokio::test]
async fn creates_bookings_with_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let repo = BookingRepository::new(db);
    let param = params(vehicle.id, BookingStatus::Pending);
    let first = repo.create(user.id, &param).await?;
    let second = repo.create(user.id, &param).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
