//! Domain & parameter models for event operations
//!
//! Defines the event domain model, the validated field set written on create and
//! update, the partial update parameters, and conversions from the entity and into DTOs.
//!
//! `duration` is never taken from a client: it is derived from `start` and `end`
//! whenever an event is written.

use chrono::NaiveDate;

use crate::{
    model::event::{CreateEventDto, EventDto, UpdateEventDto},
    server::{
        error::{internal::InternalError, validation::ValidationErrors, AppError},
        util::validate,
    },
};

/// Season of a Paralympic Games edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Summer,
    Winter,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "summer" => Some(Self::Summer),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }
}

/// Number of days between `start` and `end`, if both are known.
pub fn derive_duration(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<i32> {
    match (start, end) {
        (Some(start), Some(end)) => i32::try_from((end - start).num_days()).ok(),
        _ => None,
    }
}

/// The event domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub event_type: EventType,
    pub year: i32,
    pub country: String,
    pub host: String,
    pub noc: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub duration: Option<i32>,
    pub disabilities_included: Option<String>,
    pub countries: Option<i32>,
    pub events: Option<i32>,
    pub sports: Option<i32>,
    pub participants_m: Option<i32>,
    pub participants_f: Option<i32>,
    pub participants: Option<i32>,
    pub highlights: Option<String>,
}

impl Event {
    /// Converts an entity model to the event domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Event)` - The converted event domain model
    /// - `Err(AppError::InternalErr(UnknownEventType))` - The stored type is neither
    ///   `summer` nor `winter`
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, AppError> {
        let event_type =
            EventType::parse(&entity.event_type).ok_or_else(|| InternalError::UnknownEventType {
                id: entity.id,
                value: entity.event_type.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            event_type,
            year: entity.year,
            country: entity.country,
            host: entity.host,
            noc: entity.noc,
            start: entity.start,
            end: entity.end,
            duration: entity.duration,
            disabilities_included: entity.disabilities_included,
            countries: entity.countries,
            events: entity.events,
            sports: entity.sports,
            participants_m: entity.participants_m,
            participants_f: entity.participants_f,
            participants: entity.participants,
            highlights: entity.highlights,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            event_type: self.event_type.as_str().to_string(),
            year: self.year,
            country: self.country,
            host: self.host,
            noc: self.noc,
            start: self.start,
            end: self.end,
            duration: self.duration,
            disabilities_included: self.disabilities_included,
            countries: self.countries,
            events: self.events,
            sports: self.sports,
            participants_m: self.participants_m,
            participants_f: self.participants_f,
            participants: self.participants,
            highlights: self.highlights,
        }
    }
}

/// Every client writable event field, as stored on create and after a patch is merged.
#[derive(Debug, Clone, PartialEq)]
pub struct EventParam {
    pub event_type: EventType,
    pub year: i32,
    pub country: String,
    pub host: String,
    pub noc: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub disabilities_included: Option<String>,
    pub countries: Option<i32>,
    pub events: Option<i32>,
    pub sports: Option<i32>,
    pub participants_m: Option<i32>,
    pub participants_f: Option<i32>,
    pub participants: Option<i32>,
    pub highlights: Option<String>,
}

impl EventParam {
    /// Validates a create payload and converts it to parameters
    ///
    /// `id` and `duration` in the payload are ignored.
    ///
    /// # Arguments
    /// - `dto` - The request payload
    ///
    /// # Returns
    /// - `Ok(EventParam)` - Validated parameters
    /// - `Err(ValidationErrors)` - One or more fields are invalid
    pub fn from_dto(dto: CreateEventDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let event_type = parse_event_type(&mut errors, &dto.event_type);
        let disabilities_included = validate::disabilities(
            &mut errors,
            "disabilities_included",
            dto.disabilities_included.as_deref(),
        );

        let param = Self {
            // Placeholder when the type failed to parse; `errors` is non-empty then.
            event_type: event_type.unwrap_or(EventType::Summer),
            year: dto.year,
            country: dto.country.trim().to_string(),
            host: dto.host.trim().to_string(),
            noc: dto.noc,
            start: dto.start,
            end: dto.end,
            disabilities_included,
            countries: dto.countries,
            events: dto.events,
            sports: dto.sports,
            participants_m: dto.participants_m,
            participants_f: dto.participants_f,
            participants: dto.participants,
            highlights: dto.highlights,
        };
        param.check(&mut errors);

        errors.into_result(param)
    }

    /// Checks the field rules that hold for every stored event.
    ///
    /// # Returns
    /// - `Ok(())` - All fields valid
    /// - `Err(ValidationErrors)` - One or more fields are invalid
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check(&mut errors);
        errors.into_result(())
    }

    fn check(&self, errors: &mut ValidationErrors) {
        validate::year(errors, "year", self.year);
        validate::not_blank(errors, "country", &self.country);
        validate::not_blank(errors, "host", &self.host);
        validate::noc(errors, "NOC", &self.noc);
        validate::date_order(errors, self.start, self.end);
        validate::non_negative(errors, "countries", self.countries);
        validate::non_negative(errors, "events", self.events);
        validate::non_negative(errors, "sports", self.sports);
        validate::non_negative(errors, "participants_m", self.participants_m);
        validate::non_negative(errors, "participants_f", self.participants_f);
        validate::non_negative(errors, "participants", self.participants);
        validate::max_chars(
            errors,
            "highlights",
            self.highlights.as_deref(),
            validate::MAX_HIGHLIGHTS_LEN,
        );
    }

    pub fn duration(&self) -> Option<i32> {
        derive_duration(self.start, self.end)
    }
}

/// Parameters for a partial event update
///
/// `None` leaves a field unchanged; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEventParam {
    pub event_type: Option<EventType>,
    pub year: Option<i32>,
    pub country: Option<String>,
    pub host: Option<String>,
    pub noc: Option<String>,
    pub start: Option<Option<NaiveDate>>,
    pub end: Option<Option<NaiveDate>>,
    pub disabilities_included: Option<Option<String>>,
    pub countries: Option<Option<i32>>,
    pub events: Option<Option<i32>>,
    pub sports: Option<Option<i32>>,
    pub participants_m: Option<Option<i32>>,
    pub participants_f: Option<Option<i32>>,
    pub participants: Option<Option<i32>>,
    pub highlights: Option<Option<String>>,
}

impl UpdateEventParam {
    /// Converts a patch payload to parameters
    ///
    /// Only checks that can be made on a single field happen here; the merged result
    /// is validated again by `EventParam::validate` once applied to the stored event.
    ///
    /// # Returns
    /// - `Ok(UpdateEventParam)` - Converted parameters
    /// - `Err(ValidationErrors)` - Null required field, unknown type or disability category
    pub fn from_dto(dto: UpdateEventDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let event_type = validate::not_null(&mut errors, "type", dto.event_type)
            .and_then(|value| parse_event_type(&mut errors, &value));
        let year = validate::not_null(&mut errors, "year", dto.year);
        let country = validate::not_null(&mut errors, "country", dto.country);
        let host = validate::not_null(&mut errors, "host", dto.host);
        let noc = validate::not_null(&mut errors, "NOC", dto.noc);
        let disabilities_included = dto.disabilities_included.map(|value| {
            validate::disabilities(&mut errors, "disabilities_included", value.as_deref())
        });

        errors.into_result(Self {
            event_type,
            year,
            country: country.map(|c| c.trim().to_string()),
            host: host.map(|h| h.trim().to_string()),
            noc,
            start: dto.start,
            end: dto.end,
            disabilities_included,
            countries: dto.countries,
            events: dto.events,
            sports: dto.sports,
            participants_m: dto.participants_m,
            participants_f: dto.participants_f,
            participants: dto.participants,
            highlights: dto.highlights,
        })
    }

    /// Merges the supplied fields over the stored event.
    pub fn apply(&self, current: &Event) -> EventParam {
        EventParam {
            event_type: self.event_type.unwrap_or(current.event_type),
            year: self.year.unwrap_or(current.year),
            country: pick(&self.country, &current.country),
            host: pick(&self.host, &current.host),
            noc: pick(&self.noc, &current.noc),
            start: self.start.unwrap_or(current.start),
            end: self.end.unwrap_or(current.end),
            disabilities_included: pick(
                &self.disabilities_included,
                &current.disabilities_included,
            ),
            countries: self.countries.unwrap_or(current.countries),
            events: self.events.unwrap_or(current.events),
            sports: self.sports.unwrap_or(current.sports),
            participants_m: self.participants_m.unwrap_or(current.participants_m),
            participants_f: self.participants_f.unwrap_or(current.participants_f),
            participants: self.participants.unwrap_or(current.participants),
            highlights: pick(&self.highlights, &current.highlights),
        }
    }
}

fn pick<T: Clone>(update: &Option<T>, current: &T) -> T {
    update.as_ref().unwrap_or(current).clone()
}

fn parse_event_type(errors: &mut ValidationErrors, value: &str) -> Option<EventType> {
    let parsed = EventType::parse(value);
    if parsed.is_none() {
        errors.add("type", "Must be either 'summer' or 'winter'.");
    }
    parsed
}
