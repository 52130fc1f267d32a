use super::*;

/// Tests case-insensitive substring matching on brand.
#[tokio::test]
async fn filters_by_brand_substring_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bmw = factory::vehicle::VehicleFactory::new(db).brand("BMW").build().await?;
    factory::vehicle::VehicleFactory::new(db).brand("Porsche").build().await?;

    let filter = VehicleFilter {
        brand: Some("bm".to_string()),
        ..Default::default()
    };
    let found = VehicleRepository::new(db).search(&filter).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, bmw.id);

    Ok(())
}

/// Tests the numeric range and threshold filters together.
#[tokio::test]
async fn filters_by_price_seats_and_luggage() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let fitting = factory::vehicle::VehicleFactory::new(db)
        .price_per_day(120.0)
        .seats(5)
        .luggage(4)
        .build()
        .await?;
    // Too expensive.
    factory::vehicle::VehicleFactory::new(db).price_per_day(480.0).build().await?;
    // Too small.
    factory::vehicle::VehicleFactory::new(db)
        .price_per_day(110.0)
        .seats(2)
        .build()
        .await?;

    let filter = VehicleFilter {
        min_price: Some(100.0),
        max_price: Some(200.0),
        min_seats: Some(4),
        min_luggage: Some(3),
        ..Default::default()
    };
    let found = VehicleRepository::new(db).search(&filter).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, fitting.id);

    Ok(())
}

/// Tests the boolean and exact-match filters.
#[tokio::test]
async fn filters_by_availability_electric_and_gear_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manual_ev = factory::vehicle::VehicleFactory::new(db)
        .electric(true)
        .gear_type(Some("Manual".to_string()))
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db).availability(false).build().await?;
    factory::vehicle::VehicleFactory::new(db).build().await?;

    let filter = VehicleFilter {
        availability: Some(true),
        electric: Some(true),
        gear_type: Some("Manual".to_string()),
        ..Default::default()
    };
    let found = VehicleRepository::new(db).search(&filter).await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, manual_ev.id);

    Ok(())
}

/// Tests that results come back cheapest first.
#[tokio::test]
async fn orders_results_by_price_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vehicle::VehicleFactory::new(db).price_per_day(300.0).build().await?;
    factory::vehicle::VehicleFactory::new(db).price_per_day(90.0).build().await?;
    factory::vehicle::VehicleFactory::new(db).price_per_day(180.0).build().await?;

    let found = VehicleRepository::new(db).search(&VehicleFilter::default()).await?;

    let prices: Vec<f64> = found.iter().map(|v| v.price_per_day).collect();
    assert_eq!(prices, vec![90.0, 180.0, 300.0]);

    Ok(())
}
