//! Venue pages: area listing, search results and the venue profile.

use super::layout::Page;
use super::{
    delete_button, entry_list, external_link, genre_tags, image, optional_line, search_results,
    show_cards, Counterpart,
};
use crate::application::dto::{AreaListing, SearchResults, VenueDetail};
use crate::presentation::http::flash::FlashMessage;
use crate::shared::html::{escape, escape_opt};

pub fn list_page(areas: &[AreaListing], flash: Option<&FlashMessage>) -> String {
    let mut body = String::from(r#"<h1>Venues</h1><p><a href="/venues/create">List a venue</a></p>"#);
    if areas.is_empty() {
        body.push_str(r#"<p class="empty">No venues listed yet.</p>"#);
    }
    for area in areas {
        body.push_str(&format!(
            "<section><h3>{}, {}</h3>{}</section>",
            escape(&area.city),
            escape(&area.state),
            entry_list("/venues", &area.venues)
        ));
    }
    Page::new("Venues", flash).render(&body)
}

pub fn search_page(results: &SearchResults, flash: Option<&FlashMessage>) -> String {
    Page::new("Venue Search", flash).render(&search_results("/venues", results))
}

pub fn detail_page(detail: &VenueDetail, flash: Option<&FlashMessage>) -> String {
    let venue = &detail.venue;

    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><p><strong>Currently seeking talent</strong></p><p>{}</p></div>"#,
            escape_opt(venue.seeking_description.as_deref())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking talent</p>"#.to_string()
    };

    let body = format!(
        r#"<article>
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<ul class="details">
<li>{address}</li>
<li>{city}, {state}</li>
{phone}{website}{facebook}
</ul>
{seeking}
{image}
<p><a href="/venues/{id}/edit">Edit</a> {delete}</p>
</article>
<section><h2>{upcoming_count} Upcoming Shows</h2>{upcoming}</section>
<section><h2>{past_count} Past Shows</h2>{past}</section>"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = optional_line("phone", venue.phone.as_deref()),
        website = external_link("Website", venue.website_link.as_deref()),
        facebook = external_link("Facebook", venue.facebook_link.as_deref()),
        seeking = seeking,
        image = image(venue.image_link.as_deref(), &venue.name),
        delete = delete_button(&format!("/venues/{}/delete", venue.id), "Delete venue"),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = show_cards(&detail.upcoming_shows, Counterpart::Artist),
        past_count = detail.past_shows_count,
        past = show_cards(&detail.past_shows, Counterpart::Artist)
    );
    Page::new(&venue.name, flash).render(&body)
}
