use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserialize_some;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i32,
    /// Either `summer` or `winter`.
    #[serde(rename = "type")]
    pub event_type: String,
    pub year: i32,
    pub country: String,
    pub host: String,
    #[serde(rename = "NOC")]
    pub noc: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Days between `start` and `end`, derived by the server.
    pub duration: Option<i32>,
    /// Comma separated disability categories.
    pub disabilities_included: Option<String>,
    pub countries: Option<i32>,
    pub events: Option<i32>,
    pub sports: Option<i32>,
    pub participants_m: Option<i32>,
    pub participants_f: Option<i32>,
    pub participants: Option<i32>,
    pub highlights: Option<String>,
}

/// Payload for creating an event.
///
/// Accepts the same shape as `EventDto` so a serialized event can be posted back;
/// `id` and `duration` are ignored since the server assigns and derives them.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateEventDto {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub year: i32,
    pub country: String,
    pub host: String,
    #[serde(rename = "NOC")]
    pub noc: String,
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub disabilities_included: Option<String>,
    #[serde(default)]
    pub countries: Option<i32>,
    #[serde(default)]
    pub events: Option<i32>,
    #[serde(default)]
    pub sports: Option<i32>,
    #[serde(default)]
    pub participants_m: Option<i32>,
    #[serde(default)]
    pub participants_f: Option<i32>,
    #[serde(default)]
    pub participants: Option<i32>,
    #[serde(default)]
    pub highlights: Option<String>,
}

/// Partial update for an event. Absent fields are left unchanged; `null` clears
/// an optional field and is rejected on a required one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateEventDto {
    #[serde(rename = "type", default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub event_type: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub host: Option<Option<String>>,
    #[serde(rename = "NOC", default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub noc: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<NaiveDate>)]
    pub start: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<NaiveDate>)]
    pub end: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub disabilities_included: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub countries: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub events: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub sports: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub participants_m: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub participants_f: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub participants: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub highlights: Option<Option<String>>,
}
