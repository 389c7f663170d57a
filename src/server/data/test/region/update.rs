use super::*;

/// Tests that only supplied fields change.
///
/// Expected: Ok with notes replaced and the name untouched
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::region::RegionFactory::new(db)
        .region("Netherlands")
        .build()
        .await?;

    let repo = RegionRepository::new(db);
    let updated = repo
        .update(
            &created.noc,
            UpdateRegionParam {
                region: None,
                notes: Some(Some("Holland".to_string())),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.noc, created.noc);
    assert_eq!(updated.region, "Netherlands");
    assert_eq!(updated.notes.as_deref(), Some("Holland"));

    Ok(())
}

/// Tests clearing notes with an explicit null.
///
/// Expected: Ok with notes set to None
#[tokio::test]
async fn clears_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Region)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::region::RegionFactory::new(db)
        .notes("temporary")
        .build()
        .await?;

    let repo = RegionRepository::new(db);
    let updated = repo
        .update(
            &created.noc,
            UpdateRegionParam {
                region: None,
                notes: Some(None),
            },
        )
        .await?
        .unwrap();

    assert!(updated.notes.is_none());

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
    let result = repo
        .update(
            "XYZ",
            UpdateRegionParam {
                region: Some("Nowhere".to_string()),
                notes: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
