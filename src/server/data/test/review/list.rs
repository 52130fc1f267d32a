use super::*;

/// Tests that listing is scoped to the vehicle code and newest-first.
#[tokio::test]
async fn lists_reviews_for_code_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_review(db, "V061").await?;
    let second = factory::create_review(db, "V061").await?;
    factory::create_review(db, "V099").await?;

    let reviews = ReviewRepository::new(db).list_by_vehicle_code("V061").await?;

    assert_eq!(reviews.len(), 2);
    // Same date; creation order breaks the tie, newest first.
    assert_eq!(reviews[0].id, second.id);
    assert_eq!(reviews[1].id, first.id);

    Ok(())
}

/// Tests the booking-scoped lookup used by the one-review-per-booking rule.
#[tokio::test]
async fn finds_review_by_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, vehicle, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let review = factory::review::ReviewFactory::new(db, &vehicle.code)
        .booking_id(Some(booking.id))
        .user_id(Some(user.id))
        .build()
        .await?;

    let repo = ReviewRepository::new(db);

    assert_eq!(
        repo.find_by_booking(booking.id).await?.map(|r| r.id),
        Some(review.id)
    );
    assert!(repo.find_by_booking(uuid::Uuid::new_v4()).await?.is_none());

    Ok(())
}
