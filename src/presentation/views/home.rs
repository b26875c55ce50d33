use super::layout::Page;
use super::entry_list;
use crate::application::dto::HomeOverview;
use crate::presentation::http::flash::FlashMessage;

pub fn home_page(overview: &HomeOverview, flash: Option<&FlashMessage>) -> String {
    let body = format!(
        r#"<h1>Book your next show</h1>
<section class="search">
<form method="post" action="/venues/search"><input type="search" name="search_term" placeholder="Find a venue" aria-label="Find a venue"> <button type="submit">Search venues</button></form>
<form method="post" action="/artists/search"><input type="search" name="search_term" placeholder="Find an artist" aria-label="Find an artist"> <button type="submit">Search artists</button></form>
</section>
<p><a href="/venues/create">List a venue</a> · <a href="/artists/create">List an artist</a> · <a href="/shows/create">Book a show</a></p>
<section><h2>Recently listed venues</h2>{venues}</section>
<section><h2>Recently listed artists</h2>{artists}</section>"#,
        venues = entry_list("/venues", &overview.recent_venues),
        artists = entry_list("/artists", &overview.recent_artists)
    );
    Page::new("Home", flash).render(&body)
}
