use super::*;

/// Tests that the listing joins vehicles and orders by pickup date descending.
#[tokio::test]
async fn lists_own_bookings_with_vehicles_newest_pickup_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let vehicle = factory::create_vehicle(db).await?;

    let earlier = factory::booking::BookingFactory::new(db, user.id, vehicle.id)
        .pickup_date(Utc::now() + Duration::days(1))
        .build()
        .await?;
    let later = factory::booking::BookingFactory::new(db, user.id, vehicle.id)
        .pickup_date(Utc::now() + Duration::days(7))
        .build()
        .await?;
    factory::create_booking(db, stranger.id, vehicle.id).await?;

    let rows = BookingRepository::new(db)
        .list_for_user_with_vehicles(user.id)
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0.id, later.id);
    assert_eq!(rows[1].0.id, earlier.id);
    assert_eq!(rows[0].1.as_ref().map(|v| v.id), Some(vehicle.id));

    Ok(())
}

/// Tests owner scoping of single-row lookups.
#[tokio::test]
async fn find_for_user_requires_ownership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vehicle, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);

    assert!(repo.find_for_user(booking.id, user.id).await?.is_some());
    assert!(repo.find_for_user(booking.id, stranger.id).await?.is_none());

    let joined = repo.find_with_vehicle(booking.id, user.id).await?;
    assert!(joined.is_some());

    Ok(())
}
