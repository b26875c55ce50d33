//! Artist page and form flows.

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;

use crate::common::TestApp;

fn guns_n_petals<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "Guns N Petals"),
        ("city", "San Francisco"),
        ("state", "ca"),
        ("phone", "3261235000"),
        ("genres", "Rock n Roll"),
        ("image_link", "https://images.example.com/guns-n-petals.jpg"),
        ("seeking_venue", "on"),
        ("seeking_description", "Looking for shows to perform at in the San Francisco Bay Area!"),
    ]
}

#[tokio::test]
async fn test_create_artist() {
    let app = TestApp::new().await;

    let response = app.post_form("/artists/create", &guns_n_petals()).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));

    let home = response.follow(&app).await;
    assert!(home.body.contains("Artist Guns N Petals was successfully listed!"));

    let store = app.store();
    let artist = &store.artists[0];
    assert_eq!(artist.state, "CA");
    assert_eq!(artist.phone.as_deref(), Some("326-123-5000"));
    assert!(artist.seeking_venue);
}

#[tokio::test]
async fn test_invalid_artist_urls_and_genres() {
    let app = TestApp::new().await;

    let mut fields = guns_n_petals();
    fields.retain(|(k, _)| *k != "genres" && *k != "image_link");
    fields.push(("genres", "Polka"));
    fields.push(("image_link", "ftp://images.example.com/x.jpg"));

    let response = app.post_form("/artists/create", &fields).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Unknown genre: Polka"));
    assert!(response.body.contains("Must be a valid http(s) URL"));
    assert!(app.store().artists.is_empty());
}

#[tokio::test]
async fn test_artists_listed_by_name() {
    let app = TestApp::new().await;
    app.seed_artist("The Wild Sax Band");
    app.seed_artist("Guns N Petals");
    app.seed_artist("Matt Quevedo");

    let response = app.get("/artists").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = &response.body;
    let guns = body.find("Guns N Petals").unwrap();
    let matt = body.find("Matt Quevedo").unwrap();
    let sax = body.find("The Wild Sax Band").unwrap();
    assert!(guns < matt && matt < sax);
    assert!(body.contains(r#"action="/artists/search""#));
}

#[tokio::test]
async fn test_search_artists() {
    let app = TestApp::new().await;
    app.seed_artist("Guns N Petals");
    app.seed_artist("Matt Quevedo");
    app.seed_artist("The Wild Sax Band");

    let response = app.post_form("/artists/search", &[("search_term", "A")]).await;
    assert!(response.body.contains(r#"search results for "A": 3"#));

    let response = app.post_form("/artists/search", &[("search_term", "band")]).await;
    assert!(response.body.contains(r#"search results for "band": 1"#));
    assert!(response.body.contains("The Wild Sax Band"));
}

#[tokio::test]
async fn test_artist_detail_links_venues() {
    let app = TestApp::new().await;
    let artist = app.seed_artist("Matt Quevedo");
    let venue = app.seed_venue("The Dueling Pianos Bar", "New York", "NY");
    app.seed_show(venue, artist, Utc::now() - Duration::days(400));

    let response = app.get(&format!("/artists/{}", artist)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("0 Upcoming Shows"));
    assert!(response.body.contains("1 Past Shows"));
    assert!(response.body.contains(&format!(r#"href="/venues/{}""#, venue)));
    assert!(response.body.contains("Not currently seeking performance venues"));
}

#[tokio::test]
async fn test_edit_artist() {
    let app = TestApp::new().await;
    let id = app.seed_artist("Guns N Petals");

    let form = app.get(&format!("/artists/{}/edit", id)).await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains(r#"<option value="Rock n Roll" selected>"#));

    let response = app
        .post_form(&format!("/artists/{}/edit", id), &guns_n_petals())
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some(format!("/artists/{}", id).as_str()));
    assert!(app.store().artists[0].seeking_venue);
}

#[tokio::test]
async fn test_delete_artist() {
    let app = TestApp::new().await;
    let artist = app.seed_artist("Guns N Petals");
    let venue = app.seed_venue("The Musical Hop", "San Francisco", "CA");
    app.seed_show(venue, artist, Utc::now() + Duration::days(2));

    let response = app.post_form(&format!("/artists/{}/delete", artist), &[]).await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/artists"));

    let page = response.follow(&app).await;
    assert!(page.body.contains("Artist Guns N Petals was successfully deleted!"));
    assert!(app.store().shows.is_empty());
    assert_eq!(app.store().venues.len(), 1);
}
