//! Error pages.

use axum::http::StatusCode;

use super::layout::Page;
use crate::shared::html::escape;

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = match status {
        StatusCode::NOT_FOUND => "Not Found",
        s if s.is_server_error() => "Server Error",
        s => s.canonical_reason().unwrap_or("Error"),
    };
    let title = format!("{} {}", status.as_u16(), heading);
    let body = format!(
        r#"<h1>{title}</h1><p>{message}</p><p><a href="/">Back to the home page</a></p>"#,
        title = escape(&title),
        message = escape(message)
    );
    Page::new(&title, None).render(&body)
}
