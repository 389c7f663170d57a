//! Loading of the packaged reference data.
//!
//! The region and event reference files are compiled into the binary. Each table is
//! loaded only while it is empty, so restarting against an existing database leaves
//! its rows untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde::de::DeserializeOwned;

use crate::server::{
    data::{event::EventRepository, region::RegionRepository},
    error::{internal::InternalError, validation::ValidationErrors, AppError},
    model::{event::EventParam, region::CreateRegionParam},
};

const REGIONS_FILE: &str = "noc_regions.json";
const EVENTS_FILE: &str = "paralympic_events.json";

const REGIONS_JSON: &str = include_str!("../../../data/noc_regions.json");
const EVENTS_JSON: &str = include_str!("../../../data/paralympic_events.json");

/// Rows inserted by a seeding run.
#[derive(Debug, Default, PartialEq)]
pub struct SeedSummary {
    pub regions: usize,
    pub events: usize,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the reference regions and events into empty tables
    ///
    /// Regions are loaded first since events reference them. Both tables are written in
    /// one transaction, so a failure leaves neither table partially seeded.
    ///
    /// # Returns
    /// - `Ok(SeedSummary)` - Number of rows inserted per table, 0 for tables already populated
    /// - `Err(AppError::InternalErr)` - A packaged file is malformed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn seed(&self) -> Result<SeedSummary, AppError> {
        let summary = self.seed_from(REGIONS_JSON, EVENTS_JSON).await?;

        tracing::info!(
            "Reference data loaded: {} region(s), {} event(s)",
            summary.regions,
            summary.events
        );

        Ok(summary)
    }

    async fn seed_from(&self, regions: &str, events: &str) -> Result<SeedSummary, AppError> {
        let txn = self.db.begin().await?;

        let result = async {
            Ok::<_, AppError>(SeedSummary {
                regions: seed_regions(&txn, regions).await?,
                events: seed_events(&txn, events).await?,
            })
        }
        .await;

        match result {
            Ok(summary) => {
                txn.commit().await?;
                Ok(summary)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }
}

async fn seed_regions<C: ConnectionTrait>(db: &C, json: &str) -> Result<usize, AppError> {
    let repo = RegionRepository::new(db);

    if repo.count().await? > 0 {
        tracing::debug!("Region table already populated, skipping seed");
        return Ok(0);
    }

    let params = parse_records(REGIONS_FILE, json, CreateRegionParam::from_dto)?;
    let count = params.len();
    repo.create_many(params).await?;

    Ok(count)
}

async fn seed_events<C: ConnectionTrait>(db: &C, json: &str) -> Result<usize, AppError> {
    let repo = EventRepository::new(db);

    if repo.count().await? > 0 {
        tracing::debug!("Event table already populated, skipping seed");
        return Ok(0);
    }

    let params = parse_records(EVENTS_FILE, json, EventParam::from_dto)?;
    let count = params.len();
    repo.create_many(params).await?;

    Ok(count)
}

/// Parses a packaged JSON array and validates every record with `convert`.
fn parse_records<D, P, F>(file: &'static str, json: &str, convert: F) -> Result<Vec<P>, InternalError>
where
    D: DeserializeOwned,
    F: Fn(D) -> Result<P, ValidationErrors>,
{
    let records: Vec<D> =
        serde_json::from_str(json).map_err(|source| InternalError::SeedData { file, source })?;

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            convert(record).map_err(|errors| InternalError::SeedRecord {
                file,
                index,
                errors,
            })
        })
        .collect()
}
