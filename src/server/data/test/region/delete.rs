use super::*;

/// Expected: Ok(1) and the region is gone
#[tokio::test]
async fn deletes_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::region::create_region(db).await?;

    let repo = RegionRepository::new(db);
    assert_eq!(repo.delete(&created.noc).await?, 1);
    assert!(repo.find_by_noc(&created.noc).await?.is_none());

    Ok(())
}

/// Expected: Ok(0) when nothing matches
#[tokio::test]
async fn returns_zero_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    assert_eq!(repo.delete("XYZ").await?, 0);

    Ok(())
}
