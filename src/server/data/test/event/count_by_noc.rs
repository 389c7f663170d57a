use super::*;

/// Expected: Ok with only the events of the given region counted
#[tokio::test]
async fn counts_events_per_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let busy = factory::region::create_region(db).await?;
    let idle = factory::region::create_region(db).await?;
    factory::event::create_event(db, &busy.noc).await?;
    factory::event::create_event(db, &busy.noc).await?;

    let repo = EventRepository::new(db);
    assert_eq!(repo.count_by_noc(&busy.noc).await?, 2);
    assert_eq!(repo.count_by_noc(&idle.noc).await?, 0);

    Ok(())
}
