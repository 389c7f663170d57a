use std::collections::BTreeMap;

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform error envelope returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code.
    pub code: u16,
    /// Canonical reason phrase for the status code.
    pub name: String,
    /// Human readable description of what went wrong.
    pub description: String,
    /// Field level validation messages, only present for validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ErrorDto {
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            name: status.canonical_reason().unwrap_or("Unknown").to_string(),
            description: description.into(),
            errors: None,
        }
    }

    pub fn with_errors(mut self, errors: BTreeMap<String, Vec<String>>) -> Self {
        self.errors = Some(errors);
        self
    }
}

/// Plain confirmation message returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
