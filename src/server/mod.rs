//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as uniqueness and referential checks
//! - **Data Layer** (`data/`) - Database operations through SeaORM entities
//! - **Model Layer** (`model/`) - Domain models, parameter types and field validation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Access token extraction and verification
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, token keys)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and seeding
//! - **Router** (`router`) - Route table, OpenAPI document and request layers
//!
//! # Request Flow
//!
//! 1. **Router** matches the request, or answers with a 404/405 envelope
//! 2. **Middleware** resolves the access token for protected routes
//! 3. **Controller** converts DTOs to params and calls the service
//! 4. **Service** applies business rules and calls the repositories
//! 5. **Data** queries the database and returns entity models
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
