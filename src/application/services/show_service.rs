//! Show Service
//!
//! Show listing and booking. A booking must reference an existing artist
//! and venue; missing references are reported as form errors.

use std::sync::Arc;

use crate::domain::{
    ArtistRepository, NewShow, Show, ShowListing, ShowRepository, VenueRepository,
};
use crate::shared::error::AppError;
use crate::shared::validation::FormErrors;

/// Show service errors
#[derive(Debug, thiserror::Error)]
pub enum ShowError {
    #[error("Invalid show submission")]
    Invalid(FormErrors),

    #[error(transparent)]
    App(#[from] AppError),
}

#[derive(Clone)]
pub struct ShowService {
    shows: Arc<dyn ShowRepository>,
    venues: Arc<dyn VenueRepository>,
    artists: Arc<dyn ArtistRepository>,
}

impl ShowService {
    pub fn new(
        shows: Arc<dyn ShowRepository>,
        venues: Arc<dyn VenueRepository>,
        artists: Arc<dyn ArtistRepository>,
    ) -> Self {
        Self {
            shows,
            venues,
            artists,
        }
    }

    /// Every show ordered by start time.
    pub async fn list(&self) -> Result<Vec<ShowListing>, AppError> {
        self.shows.list_all().await
    }

    pub async fn create(&self, show: &NewShow) -> Result<Show, ShowError> {
        let mut errors = FormErrors::new();
        if self.artists.find_by_id(show.artist_id).await?.is_none() {
            errors.add("artist_id", format!("No artist with ID {}", show.artist_id));
        }
        if self.venues.find_by_id(show.venue_id).await?.is_none() {
            errors.add("venue_id", format!("No venue with ID {}", show.venue_id));
        }
        errors.into_result().map_err(ShowError::Invalid)?;

        let created = self.shows.create(show).await?;
        tracing::info!(
            show_id = created.id,
            venue_id = created.venue_id,
            artist_id = created.artist_id,
            start_time = %created.start_time,
            "Show listed"
        );
        Ok(created)
    }

    /// Delete a show. Returns the removed listing.
    pub async fn delete(&self, id: i64) -> Result<ShowListing, AppError> {
        let listing = self
            .shows
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Show", id))?;
        self.shows.delete(id).await?;
        tracing::info!(show_id = id, "Show deleted");
        Ok(listing)
    }
}
