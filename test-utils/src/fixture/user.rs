//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "fixture@example.com";

/// Creates a user entity model with default values.
///
/// The password hash is a placeholder and will not verify against any password.
pub fn entity() -> user::Model {
    user::Model {
        id: 1,
        email: DEFAULT_EMAIL.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$placeholder$placeholder".to_string(),
    }
}
