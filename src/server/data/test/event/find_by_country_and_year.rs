use super::*;

/// Expected: Ok(Some) only when both country and year match
#[tokio::test]
async fn matches_country_and_year() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::region::create_region(db).await?;
    let event = factory::event::EventFactory::new(db, &region.noc)
        .country("Canada")
        .year(1976)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let found = repo.find_by_country_and_year("Canada", 1976).await?;
    assert_eq!(found.map(|e| e.id), Some(event.id));

    assert!(repo.find_by_country_and_year("Canada", 1980).await?.is_none());
    assert!(repo.find_by_country_and_year("Sweden", 1976).await?.is_none());

    Ok(())
}
