//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database and handle
//! foreign key dependencies where asked to.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let region = factory::region::create_region(&db).await?;
//!
//!     // Create an event along with the region it references
//!     let (region, event) = factory::helpers::create_event_with_region(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db, &region.noc)
//!     .country("Japan")
//!     .year(1964)
//!     .build()
//!     .await?;
//! ```

pub mod event;
pub mod helpers;
pub mod region;
pub mod user;

pub use event::create_event;
pub use region::create_region;
pub use user::create_user;
