use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, region::RegionRepository},
    error::{validation::ValidationErrors, AppError},
    model::event::{Event, EventParam, UpdateEventParam},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all events ordered by year, then ID
    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        repo.get_all()
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect()
    }

    /// Gets an event by ID
    ///
    /// # Returns
    /// - `Ok(Event)` - The event
    /// - `Err(AppError::NotFound)` - No event with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        let entity = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        Event::from_entity(entity)
    }

    /// Creates a new event
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event with its derived duration
    /// - `Err(AppError::ValidationErr)` - `NOC` does not name an existing region
    /// - `Err(AppError::Conflict)` - An event for the same country and year exists
    pub async fn create(&self, params: EventParam) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        self.ensure_region_exists(&params.noc).await?;

        if repo
            .find_by_country_and_year(&params.country, params.year)
            .await?
            .is_some()
        {
            return Err(duplicate(&params));
        }

        let entity = repo.create(params).await?;

        Event::from_entity(entity)
    }

    /// Applies a partial update to an event
    ///
    /// The supplied fields are merged over the stored event and the result is validated
    /// as a whole, so a new `end` is checked against the stored `start`. The duration is
    /// re-derived from the merged dates.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(AppError::NotFound)` - No event with that ID
    /// - `Err(AppError::ValidationErr)` - Merged fields invalid or unknown `NOC`
    /// - `Err(AppError::Conflict)` - Another event has the merged country and year
    pub async fn update(&self, id: i32, params: UpdateEventParam) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        let current = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        let current = Event::from_entity(current)?;

        let merged = params.apply(&current);
        merged.validate()?;

        if merged.noc != current.noc {
            self.ensure_region_exists(&merged.noc).await?;
        }

        if let Some(other) = repo
            .find_by_country_and_year(&merged.country, merged.year)
            .await?
        {
            if other.id != id {
                return Err(duplicate(&merged));
            }
        }

        let entity = repo.update(id, merged).await?.ok_or_else(|| not_found(id))?;

        Event::from_entity(entity)
    }

    /// Deletes an event
    ///
    /// # Returns
    /// - `Ok(())` - Event deleted
    /// - `Err(AppError::NotFound)` - No event with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if repo.delete(id).await? == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn ensure_region_exists(&self, noc: &str) -> Result<(), AppError> {
        let region_repo = RegionRepository::new(self.db);

        if region_repo.find_by_noc(noc).await?.is_none() {
            return Err(ValidationErrors::single(
                "NOC",
                format!("No region with NOC {} exists.", noc),
            )
            .into());
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Event with id {} not found", id))
}

fn duplicate(params: &EventParam) -> AppError {
    AppError::Conflict(format!(
        "An event for {} in {} already exists",
        params.country, params.year
    ))
}
