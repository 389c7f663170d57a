//! HTTP request handlers.
//!
//! Each handler converts the request DTO into domain parameters, calls the matching
//! service and converts the result back into a DTO. Mutating handlers take an
//! `AuthUser`, so the token is checked before the handler body runs.

pub mod auth;
pub mod event;
pub mod fallback;
pub mod region;
