//! Venue page and form flows.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;

use crate::common::{encode_form, TestApp};

fn musical_hop<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "The Musical Hop"),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "1015 Folsom Street"),
        ("phone", "123-123-1234"),
        ("genres", "Jazz"),
        ("genres", "Reggae"),
        ("genres", "Folk"),
        ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
        ("website_link", "https://www.themusicalhop.com"),
        ("seeking_talent", "y"),
        ("seeking_description", "We are on the lookout for a local artist"),
    ]
}

#[tokio::test]
async fn test_create_venue_redirects_home_with_flash() {
    let app = TestApp::new().await;

    let response = app.post_form("/venues/create", &musical_hop()).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let home = response.follow(&app).await;
    assert_eq!(home.status, StatusCode::OK);
    assert!(home.body.contains("Venue The Musical Hop was successfully listed!"));

    let store = app.store();
    assert_eq!(store.venues.len(), 1);
    let venue = &store.venues[0];
    assert_eq!(venue.genres, vec!["Folk", "Jazz", "Reggae"]);
    assert!(venue.seeking_talent);
    assert_eq!(venue.image_link, None);
}

#[tokio::test]
async fn test_flash_shown_once() {
    let app = TestApp::new().await;

    let response = app.post_form("/venues/create", &musical_hop()).await;
    let home = response.follow(&app).await;
    assert!(home.body.contains("successfully listed"));

    // the page that displayed the message expires the cookie
    let cleared = home.cookie("flash").expect("flash removal cookie");
    assert_eq!(cleared, "flash=");
}

#[tokio::test]
async fn test_invalid_venue_rerenders_form() {
    let app = TestApp::new().await;

    let mut fields = musical_hop();
    fields.retain(|(k, _)| *k != "name");
    fields.push(("name", "  "));
    fields.retain(|(k, _)| *k != "state");
    fields.push(("state", "ZZ"));

    let response = app.post_form("/venues/create", &fields).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Name is required"));
    assert!(response.body.contains("Choose a US state"));
    assert!(response.body.contains(r#"value="1015 Folsom Street""#));
    assert!(app.store().venues.is_empty());
}

#[tokio::test]
async fn test_overlong_image_link_rejected() {
    let app = TestApp::new().await;

    let image_link = format!("https://images.example.com/{}.jpg", "a".repeat(480));
    assert!(image_link.len() > 500);
    let mut fields = musical_hop();
    fields.push(("image_link", image_link.as_str()));

    let response = app.post_form("/venues/create", &fields).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Links must be at most 500 characters"));
    assert!(app.store().venues.is_empty());
}

#[tokio::test]
async fn test_form_without_content_type_renders_error_page() {
    let app = TestApp::new().await;

    let request = Request::post("/venues/create")
        .body(Body::from(encode_form(&musical_hop())))
        .unwrap();
    let response = app.request(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.contains("<h1>400 Bad Request</h1>"));
    assert!(response
        .headers
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(app.store().venues.is_empty());
}

#[tokio::test]
async fn test_storage_failure_flashes_error() {
    let app = TestApp::new().await;
    app.store().fail_writes = true;

    let response = app.post_form("/venues/create", &musical_hop()).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    app.store().fail_writes = false;
    let home = response.follow(&app).await;
    assert!(home
        .body
        .contains("An error occurred. Venue The Musical Hop could not be listed."));
    assert!(home.body.contains(r#"class="flash error""#));
}

#[tokio::test]
async fn test_venues_grouped_by_area() {
    let app = TestApp::new().await;
    app.seed_venue("The Dueling Pianos Bar", "New York", "NY");
    let hop = app.seed_venue("The Musical Hop", "San Francisco", "CA");
    app.seed_venue("Park Square Live Music and Coffee", "San Francisco", "CA");
    let artist = app.seed_artist("Guns N Petals");
    app.seed_show(hop, artist, Utc::now() + Duration::days(3));
    app.seed_show(hop, artist, Utc::now() - Duration::days(3));

    let response = app.get("/venues").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = &response.body;
    let sf = body.find("San Francisco, CA").expect("SF area");
    let ny = body.find("New York, NY").expect("NY area");
    assert!(sf < ny);
    assert!(body.contains(&format!(
        r#"<a href="/venues/{}">The Musical Hop</a> <small>1 upcoming</small>"#,
        hop
    )));
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = TestApp::new().await;
    app.seed_venue("The Musical Hop", "San Francisco", "CA");
    app.seed_venue("Park Square Live Music and Coffee", "San Francisco", "CA");
    app.seed_venue("The Dueling Pianos Bar", "New York", "NY");

    let response = app.post_form("/venues/search", &[("search_term", "MUSIC")]).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"search results for "MUSIC": 2"#));
    assert!(response.body.contains("The Musical Hop"));
    assert!(!response.body.contains("The Dueling Pianos Bar"));

    let all = app.post_form("/venues/search", &[("search_term", "")]).await;
    assert!(all.body.contains(r#"search results for "": 3"#));
}

#[tokio::test]
async fn test_venue_detail_splits_shows() {
    let app = TestApp::new().await;
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA");
    let artist = app.seed_artist("Guns N Petals");
    app.seed_show(venue, artist, Utc::now() - Duration::days(30));
    app.seed_show(venue, artist, Utc::now() + Duration::days(30));
    app.seed_show(venue, artist, Utc::now() + Duration::days(60));

    let response = app.get(&format!("/venues/{}", venue)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("2 Upcoming Shows"));
    assert!(response.body.contains("1 Past Shows"));
    assert!(response.body.contains(&format!(r#"href="/artists/{}""#, artist)));
    assert!(response.body.contains("Currently seeking talent"));
}

#[tokio::test]
async fn test_unknown_venue_is_404() {
    let app = TestApp::new().await;

    let missing = app.get("/venues/999").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(missing.body.contains("404 Not Found"));

    let garbage = app.get("/venues/abc").await;
    assert_eq!(garbage.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_venue() {
    let app = TestApp::new().await;
    let id = app.seed_venue("The Musical Hop", "San Francisco", "CA");

    let form = app.get(&format!("/venues/{}/edit", id)).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains(r#"value="The Musical Hop""#));
    assert!(form.body.contains(r#"<option value="CA" selected>"#));

    let mut fields = musical_hop();
    fields.retain(|(k, _)| *k != "name" && *k != "seeking_talent");
    fields.push(("name", "The Musical Hop Annex"));

    let response = app.post_form(&format!("/venues/{}/edit", id), &fields).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some(format!("/venues/{}", id).as_str()));

    let page = response.follow(&app).await;
    assert!(page.body.contains("Venue The Musical Hop Annex was successfully updated!"));

    let store = app.store();
    assert_eq!(store.venues[0].name, "The Musical Hop Annex");
    assert!(!store.venues[0].seeking_talent);
}

#[tokio::test]
async fn test_edit_missing_venue_is_404() {
    let app = TestApp::new().await;
    let response = app.post_form("/venues/42/edit", &musical_hop()).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_removes_its_shows() {
    let app = TestApp::new().await;
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA");
    let other = app.seed_venue("The Dueling Pianos Bar", "New York", "NY");
    let artist = app.seed_artist("Guns N Petals");
    app.seed_show(venue, artist, Utc::now() + Duration::days(1));
    app.seed_show(other, artist, Utc::now() + Duration::days(1));

    let response = app.post_form(&format!("/venues/{}/delete", venue), &[]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/venues"));

    let page = response.follow(&app).await;
    assert!(page.body.contains("Venue The Musical Hop was successfully deleted!"));

    let store = app.store();
    assert_eq!(store.venues.len(), 1);
    assert_eq!(store.shows.len(), 1);
    assert_eq!(store.shows[0].venue_id, other);
}

#[tokio::test]
async fn test_delete_method_and_missing_venue() {
    let app = TestApp::new().await;
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA");

    let response = app.delete(&format!("/venues/{}", venue)).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert!(app.store().venues.is_empty());

    let again = app.delete(&format!("/venues/{}", venue)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
