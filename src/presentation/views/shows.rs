use super::layout::Page;
use super::{delete_button, image};
use crate::domain::ShowListing;
use crate::presentation::http::flash::FlashMessage;
use crate::shared::datetime::{format_datetime, DateStyle};
use crate::shared::html::escape;

pub fn list_page(shows: &[ShowListing], flash: Option<&FlashMessage>) -> String {
    let mut body = String::from(r#"<h1>Shows</h1><p><a href="/shows/create">Book a show</a></p>"#);
    if shows.is_empty() {
        body.push_str(r#"<p class="empty">No shows booked yet.</p>"#);
    } else {
        body.push_str(r#"<div class="cards">"#);
        for show in shows {
            body.push_str(&format!(
                r#"<div class="card">{img}<p>{when}</p><h5><a href="/artists/{artist_id}">{artist}</a></h5><p>playing at <a href="/venues/{venue_id}">{venue}</a></p>{delete}</div>"#,
                img = image(show.artist_image_link.as_deref(), &show.artist_name),
                when = format_datetime(show.start_time, DateStyle::Medium),
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                delete = delete_button(&format!("/shows/{}/delete", show.show_id), "Cancel")
            ));
        }
        body.push_str("</div>");
    }
    Page::new("Shows", flash).render(&body)
}
