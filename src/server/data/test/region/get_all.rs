use super::*;

/// Tests that regions are listed in code order regardless of insertion order.
///
/// Expected: Ok with regions sorted by NOC
#[tokio::test]
async fn lists_regions_ordered_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for noc in ["USA", "AUS", "JPN"] {
        factory::region::RegionFactory::new(db).noc(noc).build().await?;
    }

    let repo = RegionRepository::new(db);
    let nocs: Vec<String> = repo.get_all().await?.into_iter().map(|r| r.noc).collect();

    assert_eq!(nocs, vec!["AUS", "JPN", "USA"]);

    Ok(())
}

/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
