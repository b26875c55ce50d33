//! HTML Views
//!
//! Pages are assembled from `format!` fragments. Every user-supplied
//! value goes through [`escape`] before it reaches the markup.

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod layout;
pub mod shows;
pub mod venues;

use crate::application::dto::{ListingEntry, SearchResults};
use crate::domain::ShowListing;
use crate::shared::datetime::{format_datetime, DateStyle};
use crate::shared::html::{escape, escape_opt};

pub(crate) fn image(src: Option<&str>, alt: &str) -> String {
    match src {
        Some(src) => format!(
            r#"<img class="thumb" src="{}" alt="{}">"#,
            escape(src),
            escape(alt)
        ),
        None => String::new(),
    }
}

pub(crate) fn genre_tags(genres: &[String]) -> String {
    if genres.is_empty() {
        return String::new();
    }
    let tags: String = genres
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect();
    format!(r#"<p class="genres">{}</p>"#, tags)
}

pub(crate) fn external_link(label: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!(
            r#"<li><a href="{url}" rel="noopener noreferrer">{label}</a></li>"#,
            url = escape(url),
            label = label
        ),
        None => String::new(),
    }
}

pub(crate) fn optional_line(class: &str, value: Option<&str>) -> String {
    match value {
        Some(_) => format!(r#"<li class="{}">{}</li>"#, class, escape_opt(value)),
        None => String::new(),
    }
}

/// `<ul>` of venue or artist rows linking to their pages.
pub(crate) fn entry_list(base: &str, entries: &[ListingEntry]) -> String {
    if entries.is_empty() {
        return r#"<p class="empty">Nothing listed yet.</p>"#.to_string();
    }
    let items: String = entries
        .iter()
        .map(|e| {
            format!(
                r#"<li><a href="{base}/{id}">{name}</a> <small>{n} upcoming</small></li>"#,
                base = base,
                id = e.id,
                name = escape(&e.name),
                n = e.num_upcoming_shows
            )
        })
        .collect();
    format!(r#"<ul class="items">{}</ul>"#, items)
}

/// Body of a venue or artist search result page.
pub(crate) fn search_results(base: &str, results: &SearchResults) -> String {
    format!(
        r#"<h3>Number of search results for "{term}": {count}</h3>{list}"#,
        term = escape(&results.search_term),
        count = results.count,
        list = entry_list(base, &results.data)
    )
}

/// Which side of a show to link when it is listed on a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Counterpart {
    Venue,
    Artist,
}

pub(crate) fn show_cards(shows: &[ShowListing], counterpart: Counterpart) -> String {
    if shows.is_empty() {
        return r#"<p class="empty">No shows.</p>"#.to_string();
    }
    let cards: String = shows
        .iter()
        .map(|s| {
            let (href, name, img) = match counterpart {
                Counterpart::Venue => (
                    format!("/venues/{}", s.venue_id),
                    s.venue_name.as_str(),
                    s.venue_image_link.as_deref(),
                ),
                Counterpart::Artist => (
                    format!("/artists/{}", s.artist_id),
                    s.artist_name.as_str(),
                    s.artist_image_link.as_deref(),
                ),
            };
            format!(
                r#"<div class="card">{img}<h5><a href="{href}">{name}</a></h5><p>{when}</p></div>"#,
                img = image(img, name),
                href = href,
                name = escape(name),
                when = format_datetime(s.start_time, DateStyle::Full)
            )
        })
        .collect();
    format!(r#"<div class="cards">{}</div>"#, cards)
}

/// Confirmation form posting to the delete route.
pub(crate) fn delete_button(action: &str, label: &str) -> String {
    format!(
        r#"<form method="post" action="{}" class="inline"><button type="submit" class="danger">{}</button></form>"#,
        action, label
    )
}
