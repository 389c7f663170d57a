//! SeaORM entity models for the paralympics database.
//!
//! One module per table. `prelude` re-exports the entity types under their
//! table names for use in queries and in test schema builders.

pub mod prelude;

pub mod event;
pub mod region;
pub mod user;
