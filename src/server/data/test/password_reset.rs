use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::password_reset::PasswordResetRepository;

/// Tests that only unused, unexpired tokens are honored.
#[tokio::test]
async fn find_valid_excludes_used_and_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = PasswordResetRepository::new(db);
    let now = Utc::now();

    let valid = factory::create_reset_token(db, user.id).await?;
    let used = factory::password_reset_token::ResetTokenFactory::new(db, user.id)
        .used(true)
        .build()
        .await?;
    let expired = factory::password_reset_token::ResetTokenFactory::new(db, user.id)
        .expires_at(now - Duration::minutes(1))
        .build()
        .await?;

    assert!(repo.find_valid(&valid.token, now).await?.is_some());
    assert!(repo.find_valid(&used.token, now).await?.is_none());
    assert!(repo.find_valid(&expired.token, now).await?.is_none());
    assert!(repo.find_valid("unknown", now).await?.is_none());

    Ok(())
}

/// Tests that consuming a token is permanent.
#[tokio::test]
async fn mark_used_retires_the_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = PasswordResetRepository::new(db);

    let token = repo
        .create(user.id, "reset-token".to_string(), Utc::now() + Duration::hours(1))
        .await?;
    repo.mark_used(&token.token).await?;

    assert!(repo.find_valid(&token.token, Utc::now()).await?.is_none());

    Ok(())
}
