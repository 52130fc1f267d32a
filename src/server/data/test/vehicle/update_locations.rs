use super::*;

/// Tests flipping the availability flag.
#[tokio::test]
async fn set_availability_flips_the_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;
    let repo = VehicleRepository::new(db);

    repo.set_availability(vehicle.id, false).await?;
    assert!(!repo.find_by_id(vehicle.id).await?.unwrap().availability);

    repo.set_availability(vehicle.id, true).await?;
    assert!(repo.find_by_id(vehicle.id).await?.unwrap().availability);

    Ok(())
}

/// Tests that storing a new locations array also restores availability.
#[tokio::test]
async fn update_locations_stores_array_and_restores_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::vehicle::VehicleFactory::new(db)
        .availability(false)
        .build()
        .await?;
    let repo = VehicleRepository::new(db);

    let moved = vec!["Berlin (52.52,13.405)".to_string()];
    repo.update_locations(vehicle.id, &moved).await?;

    let stored = repo.find_by_id(vehicle.id).await?.unwrap();
    assert!(stored.availability);
    assert_eq!(stored.locations, serde_json::json!(moved));

    Ok(())
}
