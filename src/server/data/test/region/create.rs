use super::*;

/// Tests creating a new region.
///
/// Expected: Ok with region stored under its code
#[tokio::test]
async fn creates_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    let region = repo
        .create(CreateRegionParam {
            noc: "ITA".to_string(),
            region: "Italy".to_string(),
            notes: None,
        })
        .await?;

    assert_eq!(region.noc, "ITA");
    assert_eq!(region.region, "Italy");

    let stored = repo.find_by_noc("ITA").await?;
    assert_eq!(stored, Some(region));

    Ok(())
}

/// Tests inserting a region whose code already exists.
///
/// Expected: Err from the primary key constraint
#[tokio::test]
async fn fails_for_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::region::create_region(db).await?;

    let repo = RegionRepository::new(db);
    let result = repo
        .create(CreateRegionParam {
            noc: existing.noc,
            region: "Another".to_string(),
            notes: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests bulk insertion used for reference data.
///
/// Expected: Ok with every region stored, empty input is a no-op
#[tokio::test]
async fn creates_many_regions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    repo.create_many(Vec::new()).await?;
    assert_eq!(repo.count().await?, 0);

    repo.create_many(vec![
        CreateRegionParam {
            noc: "FRG".to_string(),
            region: "Germany".to_string(),
            notes: Some("West Germany".to_string()),
        },
        CreateRegionParam {
            noc: "GER".to_string(),
            region: "Germany".to_string(),
            notes: None,
        },
    ])
    .await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
