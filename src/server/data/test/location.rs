use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::location::LocationRepository;

/// Tests alphabetical ordering of the branch-city listing.
#[tokio::test]
async fn lists_locations_alphabetically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::create_named_location(db, "Mannheim").await?;
    factory::location::create_named_location(db, "Berlin").await?;
    factory::location::create_named_location(db, "Hamburg").await?;

    let locations = LocationRepository::new(db).all().await?;

    let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Berlin", "Hamburg", "Mannheim"]);

    Ok(())
}

/// Tests the id lookup.
#[tokio::test]
async fn finds_location_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_marketplace_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_location(db).await?;
    let repo = LocationRepository::new(db);

    assert_eq!(
        repo.find_by_id(created.id).await?.map(|l| l.id),
        Some(created.id)
    );
    assert!(repo.find_by_id(uuid::Uuid::new_v4()).await?.is_none());

    Ok(())
}
