use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::token::TokenService,
    state::AppState,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Resolves the user behind the request's access token.
    ///
    /// The `Authorization` header may carry the bare token or `Bearer <token>`.
    ///
    /// # Returns
    /// - `Ok(User)` - The token is valid and its user still exists
    /// - `Err(AuthError::MissingToken)` - No token sent
    /// - `Err(AuthError::InvalidToken | TokenExpired)` - Token rejected
    /// - `Err(AuthError::UserNotFound)` - The token's user has been removed
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(token) = bearer_token(headers)? else {
            return Err(AuthError::MissingToken.into());
        };

        let user_id = self.tokens.verify(token)?;

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotFound(user_id).into());
        };

        Ok(user)
    }
}

/// Reads the token from the `Authorization` header, stripping an optional `Bearer` scheme.
fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let value = value
        .to_str()
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?
        .trim();

    let token = match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        None if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };

    Ok((!token.is_empty()).then_some(token))
}

/// Extractor for handlers that require an authenticated user.
///
/// Rejects the request with 401 before the handler runs when the token is missing,
/// invalid or expired.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthGuard::new(&state.db, &state.tokens)
            .require(&parts.headers)
            .await?;

        Ok(AuthUser(user))
    }
}
