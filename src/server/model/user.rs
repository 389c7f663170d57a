//! User domain models and parameters.
//!
//! Provides the domain model for registered API users together with the parameter
//! types for registration and login, and the token issued by a successful login.

use crate::{
    model::user::{CredentialsDto, TokenDto},
    server::{
        error::{auth::AuthError, validation::ValidationErrors},
        util::validate,
    },
};

/// A registered user.
///
/// Carries the stored password hash for verification; it is never converted into a DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lowercased email address, unique across users.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Clone)]
pub struct RegisterUserParam {
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    /// Validates a registration payload.
    ///
    /// The email is trimmed and lowercased so that lookups are case insensitive.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Validated parameters
    /// - `Err(ValidationErrors)` - Missing or malformed email, or empty password
    pub fn from_dto(dto: CredentialsDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = dto.email.unwrap_or_default().trim().to_lowercase();
        validate::email(&mut errors, "email", &email);

        let password = dto.password.unwrap_or_default();
        if password.is_empty() {
            errors.add("password", "Must not be empty.");
        }

        errors.into_result(Self { email, password })
    }
}

/// Parameters for logging in.
#[derive(Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    /// Converts a login payload, treating a missing body or field as missing credentials.
    ///
    /// # Returns
    /// - `Ok(LoginParam)` - Email (normalized like registration) and password
    /// - `Err(AuthError::MissingCredentials)` - No body, email or password
    pub fn from_dto(dto: Option<CredentialsDto>) -> Result<Self, AuthError> {
        let dto = dto.ok_or(AuthError::MissingCredentials)?;

        match (dto.email, dto.password) {
            (Some(email), Some(password)) if !email.trim().is_empty() && !password.is_empty() => {
                Ok(Self {
                    email: email.trim().to_lowercase(),
                    password,
                })
            }
            _ => Err(AuthError::MissingCredentials),
        }
    }
}

/// Token issued to a user by a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub user_id: i32,
    pub token: String,
}

impl AuthToken {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            user_id: self.user_id,
            token: self.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: Option<&str>, password: Option<&str>) -> CredentialsDto {
        CredentialsDto {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn normalizes_registration_email() {
        let param =
            RegisterUserParam::from_dto(credentials(Some(" Someone@Example.COM "), Some("pw")))
                .unwrap();
        assert_eq!(param.email, "someone@example.com");
    }

    #[test]
    fn rejects_registration_without_password() {
        let errors =
            RegisterUserParam::from_dto(credentials(Some("someone@example.com"), None)).err();
        assert_eq!(errors.map(|e| e.fields()), Some(vec!["password".to_string()]));
    }

    #[test]
    fn login_requires_body_and_both_fields() {
        assert!(matches!(
            LoginParam::from_dto(None),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            LoginParam::from_dto(Some(credentials(Some("a@b.com"), None))),
            Err(AuthError::MissingCredentials)
        ));
        assert!(matches!(
            LoginParam::from_dto(Some(credentials(None, Some("pw")))),
            Err(AuthError::MissingCredentials)
        ));
        assert!(LoginParam::from_dto(Some(credentials(Some("a@b.com"), Some("pw")))).is_ok());
    }
}
