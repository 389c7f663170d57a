use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{event::EventRepository, region::RegionRepository},
    error::AppError,
    model::region::{CreateRegionParam, Region, UpdateRegionParam},
};

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all regions ordered by code
    pub async fn get_all(&self) -> Result<Vec<Region>, AppError> {
        let repo = RegionRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a region by code
    ///
    /// # Returns
    /// - `Ok(Region)` - The region
    /// - `Err(AppError::NotFound)` - No region with that code
    pub async fn get_by_noc(&self, noc: &str) -> Result<Region, AppError> {
        let repo = RegionRepository::new(self.db);

        repo.find_by_noc(noc)
            .await?
            .ok_or_else(|| not_found(noc))
    }

    /// Creates a new region
    ///
    /// # Returns
    /// - `Ok(Region)` - The created region
    /// - `Err(AppError::Conflict)` - A region with the same code already exists
    pub async fn create(&self, params: CreateRegionParam) -> Result<Region, AppError> {
        let repo = RegionRepository::new(self.db);

        if repo.find_by_noc(&params.noc).await?.is_some() {
            return Err(already_exists(&params.noc));
        }

        let noc = params.noc.clone();

        // A concurrent insert can still win between the lookup and the insert.
        repo.create(params)
            .await
            .map_err(|err| constraint_conflict(err, || already_exists(&noc)))
    }

    /// Applies a partial update to a region
    ///
    /// # Returns
    /// - `Ok(Region)` - The updated region
    /// - `Err(AppError::NotFound)` - No region with that code
    pub async fn update(&self, noc: &str, params: UpdateRegionParam) -> Result<Region, AppError> {
        let repo = RegionRepository::new(self.db);

        repo.update(noc, params)
            .await?
            .ok_or_else(|| not_found(noc))
    }

    /// Deletes a region that no event refers to
    ///
    /// # Returns
    /// - `Ok(())` - Region deleted
    /// - `Err(AppError::NotFound)` - No region with that code
    /// - `Err(AppError::Conflict)` - Events still reference the region
    pub async fn delete(&self, noc: &str) -> Result<(), AppError> {
        let repo = RegionRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);

        if repo.find_by_noc(noc).await?.is_none() {
            return Err(not_found(noc));
        }

        let events = event_repo.count_by_noc(noc).await?;
        if events > 0 {
            return Err(has_events(noc, events));
        }

        // An event added after the count is caught by the foreign key.
        repo.delete(noc)
            .await
            .map_err(|err| constraint_conflict(err, || has_events(noc, 1)))?;

        Ok(())
    }
}

fn not_found(noc: &str) -> AppError {
    AppError::NotFound(format!("Region with NOC {} not found", noc))
}

fn already_exists(noc: &str) -> AppError {
    AppError::Conflict(format!("Region with NOC {} already exists", noc))
}

fn has_events(noc: &str, events: u64) -> AppError {
    AppError::Conflict(format!(
        "Region {} cannot be deleted while {} event(s) reference it",
        noc, events
    ))
}

/// Maps a unique or foreign key violation to `conflict`, anything else to a database error.
fn constraint_conflict(err: DbErr, conflict: impl FnOnce() -> AppError) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_))
        | Some(SqlErr::ForeignKeyConstraintViolation(_)) => conflict(),
        _ => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    #[tokio::test]
    async fn rejects_duplicate_code() {
        let test = TestBuilder::new()
            .with_paralympics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = factory::region::create_region(db).await.unwrap();

        let result = RegionService::new(db)
            .create(CreateRegionParam {
                noc: existing.noc.clone(),
                region: "Duplicate".to_string(),
                notes: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let stored = RegionService::new(db).get_by_noc(&existing.noc).await.unwrap();
        assert_eq!(stored.region, existing.region);
    }

    #[tokio::test]
    async fn patching_notes_keeps_code_and_name() {
        let test = TestBuilder::new()
            .with_paralympics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = factory::region::create_region(db).await.unwrap();

        let updated = RegionService::new(db)
            .update(
                &existing.noc,
                UpdateRegionParam {
                    region: None,
                    notes: Some(Some("Updated".to_string())),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.noc, existing.noc);
        assert_eq!(updated.region, existing.region);
        assert_eq!(updated.notes.as_deref(), Some("Updated"));
    }

    #[tokio::test]
    async fn refuses_to_delete_region_with_events() {
        let test = TestBuilder::new()
            .with_paralympics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (region, event) = factory::helpers::create_event_with_region(db).await.unwrap();

        let service = RegionService::new(db);
        let result = service.delete(&region.noc).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert!(service.get_by_noc(&region.noc).await.is_ok());
        let events = EventRepository::new(db).find_by_id(event.id).await.unwrap();
        assert!(events.is_some());
    }

    #[tokio::test]
    async fn duplicate_insert_maps_to_conflict() {
        let test = TestBuilder::new()
            .with_paralympics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let existing = factory::region::create_region(db).await.unwrap();
        let err = RegionRepository::new(db)
            .create(CreateRegionParam {
                noc: existing.noc.clone(),
                region: "Racing insert".to_string(),
                notes: None,
            })
            .await
            .unwrap_err();

        let mapped = constraint_conflict(err, || already_exists(&existing.noc));
        assert!(matches!(mapped, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn referenced_delete_maps_to_conflict() {
        let test = TestBuilder::new()
            .with_paralympics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (region, _) = factory::helpers::create_event_with_region(db).await.unwrap();
        let err = RegionRepository::new(db).delete(&region.noc).await.unwrap_err();

        let mapped = constraint_conflict(err, || has_events(&region.noc, 1));
        assert!(matches!(mapped, AppError::Conflict(_)));
    }

    #[test]
    fn other_database_errors_stay_internal() {
        let mapped = constraint_conflict(DbErr::Custom("disk full".to_string()), || {
            already_exists("ITA")
        });

        assert!(matches!(mapped, AppError::DbErr(_)));
    }

    #[tokio::test]
    async fn missing_region_is_not_found() {
        let test = TestBuilder::new()
            .with_paralympics_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = RegionService::new(db);

        assert!(matches!(
            service.get_by_noc("XYZ").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete("XYZ").await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.update("XYZ", UpdateRegionParam::default()).await,
            Err(AppError::NotFound(_))
        ));
    }
}
