use super::*;

/// Tests replacing the password hash.
#[tokio::test]
async fn update_password_replaces_hash_and_bumps_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.update_password(user.id, "$2b$10$other").await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "$2b$10$other");
    assert!(stored.updated_at >= user.updated_at);

    Ok(())
}

/// Tests replacing the account email.
#[tokio::test]
async fn update_email_replaces_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.update_email(user.id, "moved@example.com").await?;

    assert!(repo.find_by_email("moved@example.com").await?.is_some());
    assert!(repo.find_by_email(&user.email).await?.is_none());

    Ok(())
}
