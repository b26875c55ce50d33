//! Route Configuration
//!
//! Maps every page, form target and operational endpoint to its handler.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};

use super::handlers::{self, artist, pages, show, venue};
use crate::infrastructure::metrics;
use crate::startup::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .merge(venue_routes())
        .merge(artist_routes())
        .merge(show_routes())
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .route("/metrics", get(metrics_handler))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let size = state.db.size();
    let idle = u32::try_from(state.db.num_idle()).unwrap_or(size);
    metrics::update_db_pool_stats(idle, size.saturating_sub(idle), state.settings.database.max_connections);

    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        metrics::gather_metrics(),
    )
}

fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venue::list_venues))
        .route("/venues/search", post(venue::search_venues))
        .route(
            "/venues/create",
            get(venue::create_venue_form).post(venue::create_venue),
        )
        .route(
            "/venues/{venue_id}",
            get(venue::show_venue).delete(venue::delete_venue),
        )
        .route(
            "/venues/{venue_id}/edit",
            get(venue::edit_venue_form).post(venue::update_venue),
        )
        .route("/venues/{venue_id}/delete", post(venue::delete_venue))
}

fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artist::list_artists))
        .route("/artists/search", post(artist::search_artists))
        .route(
            "/artists/create",
            get(artist::create_artist_form).post(artist::create_artist),
        )
        .route(
            "/artists/{artist_id}",
            get(artist::show_artist).delete(artist::delete_artist),
        )
        .route(
            "/artists/{artist_id}/edit",
            get(artist::edit_artist_form).post(artist::update_artist),
        )
        .route("/artists/{artist_id}/delete", post(artist::delete_artist))
}

fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(show::list_shows))
        .route(
            "/shows/create",
            get(show::create_show_form).post(show::create_show),
        )
        .route("/shows/{show_id}", delete(show::delete_show))
        .route("/shows/{show_id}/delete", post(show::delete_show))
}
