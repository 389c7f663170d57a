use super::*;

/// Expected: Ok(1) then Ok(0) when deleting the same event twice
#[tokio::test]
async fn deletes_event_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_paralympics_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_region(db).await?;

    let repo = EventRepository::new(db);
    assert_eq!(repo.delete(event.id).await?, 1);
    assert_eq!(repo.delete(event.id).await?, 0);
    assert!(repo.find_by_id(event.id).await?.is_none());

    Ok(())
}
