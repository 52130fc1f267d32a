use super::*;

/// Tests that the compare-and-swap transition applies when the current
/// status matches one of the expected ones.
///
/// Expected: 1 row affected and the new status stored.
#[tokio::test]
async fn swaps_status_when_prior_status_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vehicle, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo
        .transition(
            booking.id,
            &[BookingStatus::Confirmed],
            BookingStatus::Completed,
        )
        .await?;

    assert_eq!(rows, 1);
    let stored = repo.find_for_user(booking.id, user.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Completed);
    assert!(stored.updated_at >= booking.updated_at);

    Ok(())
}

/// Tests that a second identical swap finds nothing to update.
///
/// Expected: 0 rows affected; this is what makes the sweep idempotent.
#[tokio::test]
async fn repeated_swap_affects_no_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _vehicle, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let from = [BookingStatus::Confirmed];
    let first = repo.transition(booking.id, &from, BookingStatus::Completed).await?;
    let second = repo.transition(booking.id, &from, BookingStatus::Completed).await?;

    assert_eq!(first, 1);
    assert_eq!(second, 0);

    Ok(())
}

/// Tests that a swap expecting a different prior status leaves the row alone.
#[tokio::test]
async fn swap_with_wrong_prior_status_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _vehicle, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo
        .transition(booking.id, &[BookingStatus::Pending], BookingStatus::Cancelled)
        .await?;

    assert_eq!(rows, 0);
    let stored = repo.find_for_user(booking.id, user.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Confirmed);

    Ok(())
}
