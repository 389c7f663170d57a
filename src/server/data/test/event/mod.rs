use crate::server::{
    data::event::EventRepository,
    model::event::{EventParam, EventType},
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_noc;
mod create;
mod delete;
mod find_by_country_and_year;
mod get_all;
mod update;

/// Parameters for the 1964 Tokyo games held by the region `noc`.
fn tokyo_1964(noc: &str) -> EventParam {
    EventParam {
        event_type: EventType::Summer,
        year: 1964,
        country: "Japan".to_string(),
        host: "Tokyo".to_string(),
        noc: noc.to_string(),
        start: NaiveDate::from_ymd_opt(1964, 11, 8),
        end: NaiveDate::from_ymd_opt(1964, 11, 12),
        disabilities_included: Some("Spinal injury".to_string()),
        countries: Some(21),
        events: Some(144),
        sports: Some(9),
        participants_m: None,
        participants_f: None,
        participants: Some(375),
        highlights: None,
    }
}
