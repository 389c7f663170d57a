//! Event factory for creating test event entities.
//!
//! Events reference a region through `NOC`, so the region must exist before an event
//! is built. Use `factory::helpers::create_event_with_region` to create both.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db, "JPN")
///     .country("Japan")
///     .host("Tokyo")
///     .year(1964)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    event_type: String,
    year: i32,
    country: String,
    host: String,
    noc: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    participants: Option<i32>,
    highlights: Option<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - type: `"summer"`
    /// - year: `2000`
    /// - country: `"Country {id}"` where id is auto-incremented
    /// - host: `"Host {id}"`
    /// - dates, participants and highlights: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `noc` - Code of an existing region
    pub fn new(db: &'a DatabaseConnection, noc: &str) -> Self {
        let id = next_id();
        Self {
            db,
            event_type: "summer".to_string(),
            year: 2000,
            country: format!("Country {}", id),
            host: format!("Host {}", id),
            noc: noc.to_string(),
            start: None,
            end: None,
            participants: None,
            highlights: None,
        }
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets both dates; duration is stored as the difference in days.
    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn participants(mut self, participants: i32) -> Self {
        self.participants = Some(participants);
        self
    }

    pub fn highlights(mut self, highlights: impl Into<String>) -> Self {
        self.highlights = Some(highlights.into());
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown NOC)
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let duration = match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).num_days() as i32),
            _ => None,
        };

        entity::event::ActiveModel {
            event_type: ActiveValue::Set(self.event_type),
            year: ActiveValue::Set(self.year),
            country: ActiveValue::Set(self.country),
            host: ActiveValue::Set(self.host),
            noc: ActiveValue::Set(self.noc),
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            duration: ActiveValue::Set(duration),
            disabilities_included: ActiveValue::Set(None),
            countries: ActiveValue::Set(None),
            events: ActiveValue::Set(None),
            sports: ActiveValue::Set(None),
            participants_m: ActiveValue::Set(None),
            participants_f: ActiveValue::Set(None),
            participants: ActiveValue::Set(self.participants),
            highlights: ActiveValue::Set(self.highlights),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values for the given region.
///
/// Shorthand for `EventFactory::new(db, noc).build().await`.
pub async fn create_event(
    db: &DatabaseConnection,
    noc: &str,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, noc).build().await
}
