use super::*;

/// Tests events are listed by year, then ID.
///
/// Expected: Ok with the earlier year first and ties kept in insertion order
#[tokio::test]
async fn lists_events_ordered_by_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::region::create_region(db).await?;
    let late = factory::event::EventFactory::new(db, &region.noc)
        .year(1988)
        .build()
        .await?;
    let early = factory::event::EventFactory::new(db, &region.noc)
        .year(1976)
        .build()
        .await?;
    let winter = factory::event::EventFactory::new(db, &region.noc)
        .event_type("winter")
        .year(1976)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let ids: Vec<i32> = repo.get_all().await?.into_iter().map(|e| e.id).collect();

    assert_eq!(ids, vec![early.id, winter.id, late.id]);

    Ok(())
}
