use sea_orm::SqlErr;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParam, User},
    service::auth::{password::hash_password, AuthService},
};

impl<'a> AuthService<'a> {
    /// Registers a new user
    ///
    /// Hashes the password before storing it; the raw password is never persisted.
    ///
    /// # Arguments
    /// - `param` - Validated email and password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AuthError::EmailAlreadyRegistered)` - The email already has an account
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered(param.email).into());
        }

        let password_hash = hash_password(&param.password)?;

        // A concurrent registration can still win between the lookup and the insert.
        let user = match user_repo.create(param.email.clone(), password_hash).await {
            Ok(user) => user,
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(AuthError::EmailAlreadyRegistered(param.email).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use crate::{
        model::user::CredentialsDto,
        server::{
            error::{auth::AuthError, AppError},
            model::user::RegisterUserParam,
            service::auth::{password::verify_password, token::TokenService, AuthService},
        },
    };

    fn register_param(email: &str) -> RegisterUserParam {
        RegisterUserParam::from_dto(CredentialsDto {
            email: Some(email.to_string()),
            password: Some("hunter22".to_string()),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn stores_hashed_password() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = TokenService::new("secret");

        let user = AuthService::new(db, &tokens)
            .register(register_param("new@example.com"))
            .await
            .unwrap();

        assert_eq!(user.email, "new@example.com");
        assert_ne!(user.password_hash, "hunter22");
        assert!(verify_password("hunter22", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn rejects_second_registration() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let tokens = TokenService::new("secret");

        factory::user::UserFactory::new(db)
            .email("taken@example.com")
            .build()
            .await
            .unwrap();

        let result = AuthService::new(db, &tokens)
            .register(register_param("Taken@Example.com"))
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::EmailAlreadyRegistered(_)))
        ));
    }
}
