use super::*;

/// Tests overwriting an event recomputes the duration.
///
/// Expected: Ok with new dates and duration
#[tokio::test]
async fn overwrites_fields_and_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::region::create_region(db).await?;
    let repo = EventRepository::new(db);
    let event = repo.create(tokyo_1964(&region.noc)).await?;

    let mut params = tokyo_1964(&region.noc);
    params.end = NaiveDate::from_ymd_opt(1964, 11, 14);
    params.highlights = Some("Second games".to_string());

    let updated = repo.update(event.id, params).await?.unwrap();

    assert_eq!(updated.id, event.id);
    assert_eq!(updated.duration, Some(6));
    assert_eq!(updated.highlights.as_deref(), Some("Second games"));

    Ok(())
}

/// Expected: Ok(None) for an unknown ID
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    assert!(repo.update(404, tokyo_1964("JPN")).await?.is_none());

    Ok(())
}
