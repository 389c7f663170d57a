use thiserror::Error;

use crate::server::error::validation::ValidationErrors;

/// Internal issues with the codebase or packaged data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored event carries a type other than `summer` or `winter`.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Event {id} has unknown type '{value}'")]
    UnknownEventType {
        /// The event ID
        id: i32,
        /// The stored type value
        value: String,
    },

    /// A packaged reference data file could not be parsed.
    #[error("Failed to parse seed data file {file}: {source}")]
    SeedData {
        /// Name of the seed file
        file: &'static str,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A packaged reference data record failed validation.
    #[error("Record {index} in seed data file {file} is invalid: {errors:?}")]
    SeedRecord {
        /// Name of the seed file
        file: &'static str,
        /// Position of the record in the file
        index: usize,
        /// The failed field checks
        errors: ValidationErrors,
    },

    /// Hashing a password or reading a stored hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a token failed.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),
}
