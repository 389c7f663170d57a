use super::*;

/// Expected: Ok(Some) for a stored ID, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(found.email, created.email);

    assert!(repo.find_by_id(created.id + 1000).await?.is_none());

    Ok(())
}
