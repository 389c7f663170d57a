//! Event fixtures for creating in-memory test data.
//!
//! The defaults describe the 1960 Rome games so that derived values such as the
//! duration are easy to check by hand.

use chrono::NaiveDate;
use entity::event;

use crate::fixture::region::DEFAULT_NOC;

/// Creates an event entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - type: `"summer"`, year: `1960`
/// - country: `"Italy"`, host: `"Rome"`, NOC: `"ITA"`
/// - start/end: 1960-09-18 / 1960-09-25, duration: `7`
/// - disabilities_included: `"Spinal injury"`
/// - countries: `23`, participants: `209`
pub fn entity() -> event::Model {
    event::Model {
        id: 1,
        event_type: "summer".to_string(),
        year: 1960,
        country: "Italy".to_string(),
        host: "Rome".to_string(),
        noc: DEFAULT_NOC.to_string(),
        start: NaiveDate::from_ymd_opt(1960, 9, 18),
        end: NaiveDate::from_ymd_opt(1960, 9, 25),
        duration: Some(7),
        disabilities_included: Some("Spinal injury".to_string()),
        countries: Some(23),
        events: Some(57),
        sports: Some(8),
        participants_m: None,
        participants_f: None,
        participants: Some(209),
        highlights: Some("First Paralympic Games".to_string()),
    }
}
