//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! conversion and validation tests that only need an entity model in memory.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let event = fixture::event::entity();
//! assert_eq!(event.year, 1960);
//! ```

pub mod event;
pub mod region;
pub mod user;
