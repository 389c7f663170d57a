//! Signed access tokens.
//!
//! Tokens are HS256 JWTs carrying the user ID as `sub` plus `iat` and `exp`. A token
//! is valid until `exp` is in the past; there is no leeway, refresh or revocation.
//! The `*_at` variants take the current instant explicitly so expiry can be tested.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    util::parse::parse_subject_id,
};

/// How long an issued token stays valid, in minutes.
pub const TOKEN_LIFETIME_MINUTES: i64 = 5;

pub fn token_lifetime() -> Duration {
    Duration::minutes(TOKEN_LIFETIME_MINUTES)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies tokens signed with the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn issue(&self, user_id: i32) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token for `user_id` as if the current time were `now`.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token expiring `TOKEN_LIFETIME_MINUTES` after `now`
    /// - `Err(AppError::InternalErr(TokenEncoding))` - Signing failed
    pub fn issue_at(&self, user_id: i32, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + token_lifetime()).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(InternalError::TokenEncoding)?;

        Ok(token)
    }

    pub fn verify(&self, token: &str) -> Result<i32, AppError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the user the token was issued to
    /// - `Err(AuthError::InvalidToken)` - Malformed, wrong signature or missing claim
    /// - `Err(AuthError::TokenExpired)` - `now` has reached the `exp` claim
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<i32, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against `now` below instead of the system clock.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if now.timestamp() >= data.claims.exp {
            return Err(AuthError::TokenExpired.into());
        }

        parse_subject_id(&data.claims.sub)
    }
}
