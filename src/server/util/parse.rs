use crate::server::error::{auth::AuthError, AppError};

/// Parses the user ID carried in a token subject
///
/// # Arguments
/// - `value` - The `sub` claim, a user ID rendered as a string
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed subject to a user ID
/// - `Err(AppError::AuthErr(InvalidToken))` - The subject is not a valid ID
pub fn parse_subject_id(value: &str) -> Result<i32, AppError> {
    let result = value
        .parse::<i32>()
        .map_err(|e| AuthError::InvalidToken(format!("subject '{}': {}", value, e)))?;

    Ok(result)
}
