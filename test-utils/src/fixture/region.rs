//! Region fixtures for creating in-memory test data.

use entity::region;

/// Default test region code.
pub const DEFAULT_NOC: &str = "ITA";

/// Default test region name.
pub const DEFAULT_REGION: &str = "Italy";

/// Creates a region entity model with default values.
///
/// # Default Values
/// - noc: `"ITA"`
/// - region: `"Italy"`
/// - notes: `None`
pub fn entity() -> region::Model {
    region::Model {
        noc: DEFAULT_NOC.to_string(),
        region: DEFAULT_REGION.to_string(),
        notes: None,
    }
}
