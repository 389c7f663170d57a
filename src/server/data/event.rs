//! Event data repository for database operations.
//!
//! Provides the `EventRepository` for reading and writing event records. The stored
//! `duration` is always derived from the dates of the written parameters. Entity
//! models are returned as-is since converting the stored type can fail; the service
//! layer performs that conversion.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::EventParam;

/// Works on a plain connection or inside a transaction.
pub struct EventRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all events ordered by year, then ID
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Year)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Finds the event held in `country` in `year`, if any
    ///
    /// `(country, year)` identifies a games edition, so at most one row matches.
    pub async fn find_by_country_and_year(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Country.eq(country))
            .filter(entity::event::Column::Year.eq(year))
            .one(self.db)
            .await
    }

    /// Inserts a new event with a database assigned ID
    pub async fn create(&self, params: EventParam) -> Result<entity::event::Model, DbErr> {
        let mut active = <entity::event::ActiveModel as Default>::default();
        set_fields(&mut active, params);

        active.insert(self.db).await
    }

    /// Inserts many events in a single statement, numbering them `1..=n` in order
    ///
    /// Used for loading reference data into an empty table; does nothing for an empty list.
    pub async fn create_many(&self, params: Vec<EventParam>) -> Result<(), DbErr> {
        if params.is_empty() {
            return Ok(());
        }

        let models = params.into_iter().zip(1..).map(|(param, id)| {
            let mut active = entity::event::ActiveModel {
                id: ActiveValue::Set(id),
                ..Default::default()
            };
            set_fields(&mut active, param);
            active
        });

        entity::prelude::Event::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Overwrites every writable field of an event
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated event
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: EventParam,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        let Some(entity) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = entity.into();
        set_fields(&mut active, params);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes an event
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 if the event did not exist
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Event::find().count(self.db).await
    }

    /// Counts the events held by the region with code `noc`
    pub async fn count_by_noc(&self, noc: &str) -> Result<u64, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Noc.eq(noc))
            .count(self.db)
            .await
    }
}

fn set_fields(active: &mut entity::event::ActiveModel, params: EventParam) {
    active.duration = ActiveValue::Set(params.duration());
    active.event_type = ActiveValue::Set(params.event_type.as_str().to_string());
    active.year = ActiveValue::Set(params.year);
    active.country = ActiveValue::Set(params.country);
    active.host = ActiveValue::Set(params.host);
    active.noc = ActiveValue::Set(params.noc);
    active.start = ActiveValue::Set(params.start);
    active.end = ActiveValue::Set(params.end);
    active.disabilities_included = ActiveValue::Set(params.disabilities_included);
    active.countries = ActiveValue::Set(params.countries);
    active.events = ActiveValue::Set(params.events);
    active.sports = ActiveValue::Set(params.sports);
    active.participants_m = ActiveValue::Set(params.participants_m);
    active.participants_f = ActiveValue::Set(params.participants_f);
    active.participants = ActiveValue::Set(params.participants);
    active.highlights = ActiveValue::Set(params.highlights);
}
