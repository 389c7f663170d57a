use super::*;

/// Tests a valid token resolves to its user.
///
/// Expected: Ok(User) for both header forms
#[tokio::test]
async fn returns_user_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let user = factory::user::create_user(db).await?;
    let token = tokens.issue(user.id)?;

    let guard = AuthGuard::new(db, &tokens);
    let raw = guard.require(&authorization(&token)).await?;
    let bearer = guard
        .require(&authorization(&format!("Bearer {}", token)))
        .await?;

    assert_eq!(raw.id, user.id);
    assert_eq!(bearer.email, user.email);

    Ok(())
}

/// Expected: Err(MissingToken) without an Authorization header
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let result = AuthGuard::new(db, &tokens).require(&HeaderMap::new()).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Expected: Err(TokenExpired) for a token issued more than five minutes ago
#[tokio::test]
async fn fails_for_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let user = factory::user::create_user(db).await?;
    let token = tokens.issue_at(user.id, Utc::now() - Duration::minutes(6))?;

    let result = AuthGuard::new(db, &tokens)
        .require(&authorization(&token))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired))
    ));

    Ok(())
}

/// Expected: Err(InvalidToken) for a token signed with another secret
#[tokio::test]
async fn fails_for_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let user = factory::user::create_user(db).await?;
    let forged = TokenService::new("guessed").issue(user.id)?;

    let result = AuthGuard::new(db, &tokens)
        .require(&authorization(&forged))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a token whose user has since been removed.
///
/// Expected: Err(UserNotFound)
#[tokio::test]
async fn fails_when_user_no_longer_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("secret");

    let token = tokens.issue(4242)?;

    let result = AuthGuard::new(db, &tokens)
        .require(&authorization(&token))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(4242)))
    ));

    Ok(())
}
