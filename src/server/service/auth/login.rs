use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthToken, LoginParam},
    service::auth::{password::verify_password, AuthService},
};

impl<'a> AuthService<'a> {
    /// Checks credentials and issues a token
    ///
    /// An unknown email and a wrong password produce the same error.
    ///
    /// # Arguments
    /// - `param` - Email and password from the login request
    ///
    /// # Returns
    /// - `Ok(AuthToken)` - Token for the authenticated user
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError)` - Database, hashing or signing failure
    pub async fn login(&self, param: LoginParam) -> Result<AuthToken, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(user.id)?;

        tracing::info!("User {} logged in", user.id);

        Ok(AuthToken {
            user_id: user.id,
            token,
        })
    }
}
