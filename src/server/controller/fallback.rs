//! Responses for requests that never reach a handler.

use std::any::Any;

use axum::{http::StatusCode, response::IntoResponse, response::Response};

use crate::server::error::{error_response, InternalServerError};

/// Any path without a matching route.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested URL was not found on the server.",
    )
}

/// A known path requested with a method it does not support.
pub async fn method_not_allowed() -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "The method is not allowed for the requested URL.",
    )
}

/// Converts a handler panic into the generic 500 envelope, logging the panic payload.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    InternalServerError(format!("handler panicked: {}", detail)).into_response()
}
