//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique three letter uppercase NOC code.
///
/// Codes are derived from the shared counter so they do not collide within a test run
/// (wraps after 26^3 codes).
///
/// # Returns
/// - `String` - Code such as `"AAB"`
pub fn next_noc() -> String {
    let mut value = next_id() % (26 * 26 * 26);
    let mut letters = ['A'; 3];
    for letter in letters.iter_mut().rev() {
        *letter = char::from(b'A' + (value % 26) as u8);
        value /= 26;
    }
    letters.iter().collect()
}

/// Creates a region and an event referencing it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((region, event))` - Both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_region(
    db: &DatabaseConnection,
) -> Result<(entity::region::Model, entity::event::Model), DbErr> {
    let region = crate::factory::region::create_region(db).await?;
    let event = crate::factory::event::create_event(db, &region.noc).await?;

    Ok((region, event))
}
