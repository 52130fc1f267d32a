use super::*;

/// Tests that only confirmed bookings past their drop-off date are returned.
#[tokio::test]
async fn returns_only_expired_confirmed_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let expired = factory::booking::BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Confirmed)
        .pickup_date(Utc::now() - Duration::days(5))
        .dropoff_date(Utc::now() - Duration::days(1))
        .build()
        .await?;
    // Still running.
    factory::booking::BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    // Expired but terminal already.
    factory::booking::BookingFactory::new(db, user.id, vehicle.id)
        .status(BookingStatus::Completed)
        .pickup_date(Utc::now() - Duration::days(5))
        .dropoff_date(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let found = BookingRepository::new(db).expired_confirmed(Utc::now()).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, expired.id);

    Ok(())
}
