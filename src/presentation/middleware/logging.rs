//! Request span construction for the trace layer.

use axum::{body::Body, http::Request};
use tracing::Span;
use uuid::Uuid;

/// Span for one HTTP request, tagged with a fresh request id.
pub fn make_span(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri().path(),
        request_id = %request_id,
    )
}
