use super::*;

/// Expected: Ok(Some) for an existing code
#[tokio::test]
async fn finds_existing_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::region::RegionFactory::new(db)
        .notes("Olympic team")
        .build()
        .await?;

    let repo = RegionRepository::new(db);
    let region = repo.find_by_noc(&created.noc).await?.unwrap();

    assert_eq!(region.region, created.region);
    assert_eq!(region.notes.as_deref(), Some("Olympic team"));

    Ok(())
}

/// Expected: Ok(None) for an unknown code
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    assert!(repo.find_by_noc("XYZ").await?.is_none());

    Ok(())
}
