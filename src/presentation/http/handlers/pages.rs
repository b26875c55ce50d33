use axum::{extract::State, response::Html};
use axum_extra::extract::CookieJar;
use chrono::Utc;

use crate::application::dto::HomeOverview;
use crate::presentation::http::flash;
use crate::presentation::views;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Number of recent venues and artists shown on the home page.
pub const RECENT_LIMIT: i64 = 10;

pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>), AppError> {
    let now = Utc::now();
    let overview = HomeOverview {
        recent_venues: state.venue_service().recent(RECENT_LIMIT, now).await?,
        recent_artists: state.artist_service().recent(RECENT_LIMIT, now).await?,
    };

    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(views::home::home_page(&overview, flash.as_ref()))))
}
