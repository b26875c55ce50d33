//! Artist pages.

use super::layout::{Page, SearchTarget};
use super::{
    delete_button, entry_list, external_link, genre_tags, image, optional_line, search_results,
    show_cards, Counterpart,
};
use crate::application::dto::{ArtistDetail, ListingEntry, SearchResults};
use crate::presentation::http::flash::FlashMessage;
use crate::shared::html::{escape, escape_opt};

pub fn list_page(artists: &[ListingEntry], flash: Option<&FlashMessage>) -> String {
    let body = format!(
        r#"<h1>Artists</h1><p><a href="/artists/create">List an artist</a></p>{}"#,
        entry_list("/artists", artists)
    );
    Page::new("Artists", flash)
        .searching(SearchTarget::Artists)
        .render(&body)
}

pub fn search_page(results: &SearchResults, flash: Option<&FlashMessage>) -> String {
    Page::new("Artist Search", flash)
        .searching(SearchTarget::Artists)
        .render(&search_results("/artists", results))
}

pub fn detail_page(detail: &ArtistDetail, flash: Option<&FlashMessage>) -> String {
    let artist = &detail.artist;

    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><p><strong>Currently seeking performance venues</strong></p><p>{}</p></div>"#,
            escape_opt(artist.seeking_description.as_deref())
        )
    } else {
        r#"<p class="not-seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    let body = format!(
        r#"<article>
<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<ul class="details">
<li>{city}, {state}</li>
{phone}{website}{facebook}
</ul>
{seeking}
{image}
<p><a href="/artists/{id}/edit">Edit</a> {delete}</p>
</article>
<section><h2>{upcoming_count} Upcoming Shows</h2>{upcoming}</section>
<section><h2>{past_count} Past Shows</h2>{past}</section>"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = optional_line("phone", artist.phone.as_deref()),
        website = external_link("Website", artist.website_link.as_deref()),
        facebook = external_link("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking,
        image = image(artist.image_link.as_deref(), &artist.name),
        delete = delete_button(&format!("/artists/{}/delete", artist.id), "Delete artist"),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = show_cards(&detail.upcoming_shows, Counterpart::Venue),
        past_count = detail.past_shows_count,
        past = show_cards(&detail.past_shows, Counterpart::Venue)
    );
    Page::new(&artist.name, flash)
        .searching(SearchTarget::Artists)
        .render(&body)
}
