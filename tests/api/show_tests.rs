//! Show listing, booking and cancellation.

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use pretty_assertions::assert_eq;

use crate::common::TestApp;

#[tokio::test]
async fn test_show_form_defaults_start_time() {
    let app = TestApp::new().await;
    let response = app.get("/shows/create").await;
    assert_eq!(response.status, StatusCode::OK);

    let year = Utc::now().format("%Y").to_string();
    assert!(response.body.contains(&format!(r#"name="start_time" value="{}-"#, year)));
}

#[tokio::test]
async fn test_book_show() {
    let app = TestApp::new().await;
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA");
    let artist = app.seed_artist("Guns N Petals").to_string();
    let venue = venue.to_string();

    let response = app
        .post_form(
            "/shows/create",
            &[
                ("artist_id", artist.as_str()),
                ("venue_id", venue.as_str()),
                ("start_time", "2035-04-01 20:00:00"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let home = response.follow(&app).await;
    assert!(home.body.contains("Show was successfully listed!"));

    let store = app.store();
    assert_eq!(store.shows.len(), 1);
    assert_eq!(
        store.shows[0].start_time,
        Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_unknown_references_rejected() {
    let app = TestApp::new().await;
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA").to_string();

    let response = app
        .post_form(
            "/shows/create",
            &[
                ("artist_id", "777"),
                ("venue_id", venue.as_str()),
                ("start_time", "2035-04-01 20:00"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("No artist with ID 777"));
    assert!(app.store().shows.is_empty());
}

#[tokio::test]
async fn test_malformed_show_fields() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/shows/create",
            &[("artist_id", "x"), ("venue_id", ""), ("start_time", "soon")],
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Artist ID must be a positive number"));
    assert!(response.body.contains("Venue ID must be a positive number"));
    assert!(response.body.contains("Start time must look like"));
}

#[tokio::test]
async fn test_booking_storage_failure() {
    let app = TestApp::new().await;
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA");
    let artist = app.seed_artist("Guns N Petals").to_string();
    let venue = venue.to_string();
    app.store().fail_writes = true;

    let response = app
        .post_form(
            "/shows/create",
            &[
                ("artist_id", artist.as_str()),
                ("venue_id", venue.as_str()),
                ("start_time", "2035-04-01 20:00:00"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let home = response.follow(&app).await;
    assert!(home.body.contains("An error occurred. Show could not be listed."));
}

#[tokio::test]
async fn test_shows_ordered_by_start_time() {
    let app = TestApp::new().await;
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA");
    let early = app.seed_artist("Matt Quevedo");
    let late = app.seed_artist("The Wild Sax Band");
    app.seed_show(venue, late, Utc::now() + Duration::days(20));
    app.seed_show(venue, early, Utc::now() - Duration::days(20));

    let response = app.get("/shows").await;
    assert_eq!(response.status, StatusCode::OK);
    let first = response.body.find("Matt Quevedo").unwrap();
    let second = response.body.find("The Wild Sax Band").unwrap();
    assert!(first < second);
    assert!(response.body.contains("playing at"));
}

#[tokio::test]
async fn test_cancel_show() {
    let app = TestApp::new().await;
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA");
    let artist = app.seed_artist("Guns N Petals");
    let show = app.seed_show(venue, artist, Utc::now() + Duration::days(5));

    let response = app.post_form(&format!("/shows/{}/delete", show), &[]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/shows"));
    assert!(app.store().shows.is_empty());

    let missing = app.delete(&format!("/shows/{}", show)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
