use super::*;

/// Tests creating an event stores the derived duration.
///
/// Expected: Ok with an assigned ID and duration of 4 days
#[tokio::test]
async fn creates_event_with_derived_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::region::create_region(db).await?;

    let repo = EventRepository::new(db);
    let event = repo.create(tokyo_1964(&region.noc)).await?;

    assert!(event.id > 0);
    assert_eq!(event.event_type, "summer");
    assert_eq!(event.duration, Some(4));
    assert_eq!(event.noc, region.noc);

    Ok(())
}

/// Tests that a missing date leaves the duration empty.
///
/// Expected: Ok with duration None
#[tokio::test]
async fn leaves_duration_empty_without_both_dates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::region::create_region(db).await?;
    let mut params = tokyo_1964(&region.noc);
    params.end = None;

    let repo = EventRepository::new(db);
    let event = repo.create(params).await?;

    assert!(event.duration.is_none());

    Ok(())
}

/// Tests bulk insertion numbers events in input order.
///
/// Expected: Ok with IDs 1 and 2 assigned in order
#[tokio::test]
async fn creates_many_with_sequential_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::region::create_region(db).await?;
    let first = tokyo_1964(&region.noc);
    let mut second = tokyo_1964(&region.noc);
    second.year = 1968;
    second.host = "Tel Aviv".to_string();

    let repo = EventRepository::new(db);
    repo.create_many(vec![first, second]).await?;

    assert_eq!(repo.find_by_id(1).await?.unwrap().year, 1964);
    assert_eq!(repo.find_by_id(2).await?.unwrap().host, "Tel Aviv");
    assert_eq!(repo.count().await?, 2);

    Ok(())
}
