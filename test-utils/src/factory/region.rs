//! Region factory for creating test region entities.

use crate::factory::helpers::next_noc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test regions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let region = RegionFactory::new(&db)
///     .noc("GBR")
///     .region("Great Britain")
///     .build()
///     .await?;
/// ```
pub struct RegionFactory<'a> {
    db: &'a DatabaseConnection,
    noc: String,
    region: String,
    notes: Option<String>,
}

impl<'a> RegionFactory<'a> {
    /// Creates a new RegionFactory with default values.
    ///
    /// Defaults:
    /// - noc: unique three letter code
    /// - region: `"Region {noc}"`
    /// - notes: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let noc = next_noc();
        Self {
            db,
            region: format!("Region {}", noc),
            noc,
            notes: None,
        }
    }

    pub fn noc(mut self, noc: impl Into<String>) -> Self {
        self.noc = noc.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds and inserts the region entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::region::Model)` - Created region entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::region::Model, DbErr> {
        entity::region::ActiveModel {
            noc: ActiveValue::Set(self.noc),
            region: ActiveValue::Set(self.region),
            notes: ActiveValue::Set(self.notes),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a region with default values.
///
/// Shorthand for `RegionFactory::new(db).build().await`.
pub async fn create_region(db: &DatabaseConnection) -> Result<entity::region::Model, DbErr> {
    RegionFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_region_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Region).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let region = create_region(db).await?;

        assert_eq!(region.noc.len(), 3);
        assert!(region.region.starts_with("Region "));
        assert!(region.notes.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_region_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Region).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let region = RegionFactory::new(db)
            .noc("GBR")
            .region("Great Britain")
            .notes("Includes Northern Ireland")
            .build()
            .await?;

        assert_eq!(region.noc, "GBR");
        assert_eq!(region.region, "Great Britain");
        assert_eq!(region.notes.as_deref(), Some("Includes Northern Ireland"));

        Ok(())
    }
}
