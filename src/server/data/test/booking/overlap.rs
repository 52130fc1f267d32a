use super::*;

/// Tests overlap detection for confirmed bookings of the same vehicle.
#[tokio::test]
async fn detects_overlapping_confirmed_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let pickup = Utc::now() + Duration::days(1);
    let dropoff = Utc::now() + Duration::days(3);
    factory::booking::BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Confirmed)
        .pickup_date(pickup)
        .dropoff_date(dropoff)
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    // Window straddling the existing booking's drop-off.
    let overlapping = repo
        .has_overlapping_confirmed(
            vehicle.id,
            pickup + Duration::days(1),
            dropoff + Duration::days(1),
            None,
        )
        .await?;
    assert!(overlapping);

    // Disjoint later window.
    let disjoint = repo
        .has_overlapping_confirmed(
            vehicle.id,
            dropoff + Duration::days(1),
            dropoff + Duration::days(2),
            None,
        )
        .await?;
    assert!(!disjoint);

    // Back-to-back: intervals are half-open, so touching is not overlapping.
    let touching = repo
        .has_overlapping_confirmed(vehicle.id, dropoff, dropoff + Duration::days(1), None)
        .await?;
    assert!(!touching);

    Ok(())
}

/// Tests that non-confirmed bookings never count as conflicts.
#[tokio::test]
async fn ignores_non_confirmed_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let pickup = Utc::now() + Duration::days(1);
    let dropoff = Utc::now() + Duration::days(3);
    for status in [
        BookingStatus::Pending,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ] {
        factory::booking::BookingFactory::new(db, user.id, vehicle.id)
            .status(status)
            .pickup_date(pickup)
            .dropoff_date(dropoff)
            .build()
            .await?;
    }

    let overlapping = BookingRepository::new(db)
        .has_overlapping_confirmed(vehicle.id, pickup, dropoff, None)
        .await?;

    assert!(!overlapping);

    Ok(())
}

/// Tests that the excluded booking does not conflict with itself.
#[tokio::test]
async fn excludes_the_booking_being_transitioned() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, vehicle, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);

    let with_self = repo
        .has_overlapping_confirmed(
            vehicle.id,
            booking.pickup_date,
            booking.dropoff_date,
            None,
        )
        .await?;
    let without_self = repo
        .has_overlapping_confirmed(
            vehicle.id,
            booking.pickup_date,
            booking.dropoff_date,
            Some(booking.id),
        )
        .await?;

    assert!(with_self);
    assert!(!without_self);

    Ok(())
}
