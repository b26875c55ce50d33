//! HTTP Handlers
//!
//! Request handlers for the directory pages and operational endpoints.

pub mod artist;
pub mod health;
pub mod pages;
pub mod show;
pub mod venue;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::shared::error::AppError;

/// Parse a record id taken from the path. Anything but a positive integer
/// cannot name a record, so it is reported as not found.
pub(crate) fn parse_id(raw: &str, kind: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(format!("{} not found", kind)))
}

/// A form page re-rendered after failed validation.
pub(crate) fn invalid_form(html: String) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
