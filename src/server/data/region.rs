//! Region data repository for database operations.
//!
//! Provides the `RegionRepository` for reading and writing region records, converting
//! entity models to the region domain model at the boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryOrder,
};

use crate::server::model::region::{CreateRegionParam, Region, UpdateRegionParam};

/// Works on a plain connection or inside a transaction.
pub struct RegionRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all regions ordered by code
    pub async fn get_all(&self) -> Result<Vec<Region>, DbErr> {
        let entities = entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::Noc)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Region::from_entity).collect())
    }

    /// Finds a region by its code
    ///
    /// # Returns
    /// - `Ok(Some(Region))` - Region found
    /// - `Ok(None)` - No region with that code
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_noc(&self, noc: &str) -> Result<Option<Region>, DbErr> {
        let entity = entity::prelude::Region::find_by_id(noc.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Region::from_entity))
    }

    /// Inserts a new region
    pub async fn create(&self, params: CreateRegionParam) -> Result<Region, DbErr> {
        let entity = entity::region::ActiveModel {
            noc: ActiveValue::Set(params.noc),
            region: ActiveValue::Set(params.region),
            notes: ActiveValue::Set(params.notes),
        }
        .insert(self.db)
        .await?;

        Ok(Region::from_entity(entity))
    }

    /// Inserts many regions in a single statement
    ///
    /// Used for loading reference data; does nothing for an empty list.
    pub async fn create_many(&self, params: Vec<CreateRegionParam>) -> Result<(), DbErr> {
        if params.is_empty() {
            return Ok(());
        }

        let models = params.into_iter().map(|param| entity::region::ActiveModel {
            noc: ActiveValue::Set(param.noc),
            region: ActiveValue::Set(param.region),
            notes: ActiveValue::Set(param.notes),
        });

        entity::prelude::Region::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Applies a partial update to a region
    ///
    /// # Returns
    /// - `Ok(Some(Region))` - The updated region
    /// - `Ok(None)` - No region with that code
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        noc: &str,
        params: UpdateRegionParam,
    ) -> Result<Option<Region>, DbErr> {
        let Some(entity) = entity::prelude::Region::find_by_id(noc.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(Region::from_entity(entity)));
        }

        let mut active: entity::region::ActiveModel = entity.into();
        if let Some(region) = params.region {
            active.region = ActiveValue::Set(region);
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(notes);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Region::from_entity(entity)))
    }

    /// Deletes a region
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deleted rows, 0 if the region did not exist
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn delete(&self, noc: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Region::delete_by_id(noc.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Region::find().count(self.db).await
    }
}
