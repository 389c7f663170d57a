use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::auth::token::TokenService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn authorization(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
