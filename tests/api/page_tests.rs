//! Home page, fallback and response headers.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;

use std::sync::Arc;

use crate::common::{MemoryVenues, PanickingVenues, TestApp};

#[tokio::test]
async fn test_home_lists_recent_records() {
    let app = TestApp::new().await;
    for i in 0..12 {
        app.seed_venue(&format!("Venue {:02}", i), "Austin", "TX");
    }
    app.seed_artist("Guns N Petals");

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Recently listed venues"));
    assert!(response.body.contains("Venue 11"));
    assert!(response.body.contains("Venue 02"));
    assert!(!response.body.contains("Venue 01"));
    assert!(!response.body.contains("Venue 00"));
    assert!(response.body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_home_offers_both_searches() {
    let app = TestApp::new().await;
    let response = app.get("/").await;

    assert!(response.body.contains(r#"action="/venues/search""#));
    assert!(response.body.contains(r#"action="/artists/search""#));
    assert!(response.body.contains("Search artists"));
}

#[tokio::test]
async fn test_unmatched_route_renders_404_page() {
    let app = TestApp::new().await;
    let response = app.get("/nowhere").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Page not found"));
    assert!(response
        .headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
}

#[tokio::test]
async fn test_security_headers_on_pages() {
    let app = TestApp::new().await;
    let response = app.get("/venues").await;

    assert_eq!(response.headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    assert!(response.headers.get(header::CONTENT_SECURITY_POLICY).is_some());
    assert!(response.headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
}

#[tokio::test]
async fn test_user_content_is_escaped() {
    let app = TestApp::new().await;
    let id = app.seed_venue("<script>alert(1)</script>", "Austin", "TX");

    let response = app.get(&format!("/venues/{}", id)).await;
    assert!(!response.body.contains("<script>alert(1)</script>"));
    assert!(response.body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_handler_panic_renders_500_page() {
    let app =
        TestApp::with_venues(|store| Arc::new(PanickingVenues(MemoryVenues(store)))).await;

    let response = app.get("/venues").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.contains("500 Server Error"));
    assert!(!response.body.contains("exploded"));
    assert!(response
        .headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    // the router keeps serving after the panic
    assert_eq!(app.get("/").await.status, StatusCode::OK);
}
