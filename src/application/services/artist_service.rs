//! Artist Service
//!
//! Artist listing, search, detail pages and writes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::dto::{ArtistDetail, ListingEntry, SearchResults};
use crate::domain::services::schedule::{partition, upcoming_cutoff};
use crate::domain::{Artist, ArtistRepository, NewArtist, ShowRepository};
use crate::shared::error::AppError;

#[derive(Clone)]
pub struct ArtistService {
    artists: Arc<dyn ArtistRepository>,
    shows: Arc<dyn ShowRepository>,
}

impl ArtistService {
    pub fn new(artists: Arc<dyn ArtistRepository>, shows: Arc<dyn ShowRepository>) -> Self {
        Self { artists, shows }
    }

    /// All artists by name with their upcoming show counts.
    pub async fn list(&self, now: DateTime<Utc>) -> Result<Vec<ListingEntry>, AppError> {
        let artists = self.artists.list_all().await?;
        self.entries(&artists, now).await
    }

    pub async fn search(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults, AppError> {
        let artists = self.artists.search_by_name(term.trim()).await?;
        let data = self.entries(&artists, now).await?;
        Ok(SearchResults::new(term, data))
    }

    pub async fn detail(&self, id: i64, now: DateTime<Utc>) -> Result<ArtistDetail, AppError> {
        let artist = self.get(id).await?;
        let split = partition(self.shows.find_by_artist(id).await?, now);

        Ok(ArtistDetail {
            artist,
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Artist, AppError> {
        self.artists
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Artist", id))
    }

    pub async fn recent(&self, limit: i64, now: DateTime<Utc>) -> Result<Vec<ListingEntry>, AppError> {
        let artists = self.artists.list_recent(limit).await?;
        self.entries(&artists, now).await
    }

    pub async fn create(&self, artist: &NewArtist) -> Result<Artist, AppError> {
        let created = self.artists.create(artist).await?;
        tracing::info!(artist_id = created.id, name = %created.name, "Artist listed");
        Ok(created)
    }

    pub async fn update(&self, id: i64, artist: &NewArtist) -> Result<Artist, AppError> {
        let updated = self.artists.update(id, artist).await?;
        tracing::info!(artist_id = id, "Artist updated");
        Ok(updated)
    }

    /// Delete a previously loaded artist and its shows.
    pub async fn delete(&self, artist: &Artist) -> Result<(), AppError> {
        self.artists.delete(artist.id).await?;
        tracing::info!(artist_id = artist.id, name = %artist.name, "Artist deleted");
        Ok(())
    }

    async fn entries(
        &self,
        artists: &[Artist],
        now: DateTime<Utc>,
    ) -> Result<Vec<ListingEntry>, AppError> {
        let counts: HashMap<i64, i64> = self
            .shows
            .count_upcoming_by_artist(upcoming_cutoff(now))
            .await?;

        Ok(artists
            .iter()
            .map(|a| ListingEntry {
                id: a.id,
                name: a.name.clone(),
                num_upcoming_shows: counts.get(&a.id).copied().unwrap_or(0),
            })
            .collect())
    }
}
