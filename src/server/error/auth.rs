use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header was sent with a protected request.
    #[error("Authentication token is missing")]
    MissingToken,

    /// The token is malformed, carries a bad signature or lacks a required claim.
    #[error("Authentication token is invalid: {0}")]
    InvalidToken(String),

    /// The token was valid but its `exp` claim is in the past.
    #[error("Authentication token has expired")]
    TokenExpired,

    /// The token subject refers to a user that no longer exists.
    #[error("User {0} referenced by token not found in database")]
    UserNotFound(i32),

    /// Login was attempted without a body, an email or a password.
    #[error("Login request is missing credentials")]
    MissingCredentials,

    /// Unknown email or wrong password. Both cases share one message.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("Email {0} is already registered")]
    EmailAlreadyRegistered(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token failures share a single client-facing message so the response does not reveal
/// which check failed; the specific reason is logged at debug level.
///
/// # Returns
/// - 401 Unauthorized - For token and credential failures
/// - 409 Conflict - For `EmailAlreadyRegistered`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => {
                error_response(StatusCode::UNAUTHORIZED, "Authentication token required.")
            }
            Self::InvalidToken(_) | Self::UserNotFound(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid token. Please log in again.",
            ),
            Self::TokenExpired => error_response(
                StatusCode::UNAUTHORIZED,
                "Token expired. Please log in again.",
            ),
            Self::MissingCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Missing email or password.")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Incorrect email or password.")
            }
            Self::EmailAlreadyRegistered(_) => {
                error_response(StatusCode::CONFLICT, "Email address already registered.")
            }
        }
    }
}
