//! Paralympics Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! paralympics API. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert rows with sensible defaults
//! - **fixture**: Build in-memory entity models without touching the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_regions() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_paralympics_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let region = factory::region::create_region(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
