//! Email and password authentication with signed tokens

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

pub mod login;
pub mod password;
pub mod register;
pub mod token;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }
}
