//! Extractors whose rejections use the application error envelope.
//!
//! axum's own `Json` and `Path` extractors answer malformed input with plain text
//! bodies; these wrappers route the rejection through `AppError` instead.

use axum::{
    extract::{FromRequest, FromRequestParts},
    response::{IntoResponse, Response},
};

use crate::server::error::AppError;

/// JSON body extractor and response type rejecting with a 400 `ErrorDto`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T: serde::Serialize> IntoResponse for AppJson<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Path parameter extractor rejecting with a 400 `ErrorDto`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
