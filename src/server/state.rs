//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token service for issuing and verifying access tokens

use sea_orm::DatabaseConnection;

use crate::server::service::auth::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// token keys are small.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs and verifies access tokens with the configured secret.
    pub tokens: TokenService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service built from the configured secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenService) -> Self {
        Self { db, tokens }
    }
}
