use super::*;

/// Expected: Ok with the hash stored as given
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("new@example.com".to_string(), "$argon2id$hash".to_string())
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.password_hash, "$argon2id$hash");

    Ok(())
}

/// Expected: Err from the unique email constraint
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(existing.email, "$argon2id$other".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
