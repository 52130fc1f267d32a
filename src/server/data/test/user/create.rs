use super::*;

/// Tests account creation and the email lookups built on it.
#[tokio::test]
async fn creates_account_and_finds_it_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(CreateUserParams {
            email: "renter@example.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
        })
        .await?;

    let found = repo.find_by_email("renter@example.com").await?.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "$2b$10$hash");

    assert!(repo.email_exists("renter@example.com").await?);
    assert!(!repo.email_exists("ghost@example.com").await?);

    Ok(())
}

/// Tests that a duplicate email violates the unique constraint.
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("renter@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            email: "renter@example.com".to_string(),
            password_hash: "$2b$10$hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
