//! Venue Service
//!
//! Venue listing, search, detail pages and writes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::dto::{AreaListing, ListingEntry, SearchResults, VenueDetail};
use crate::domain::services::schedule::{group_by_area, partition, upcoming_cutoff};
use crate::domain::{NewVenue, ShowRepository, Venue, VenueRepository};
use crate::shared::error::AppError;

/// Venue operations over the venue and show repositories.
#[derive(Clone)]
pub struct VenueService {
    venues: Arc<dyn VenueRepository>,
    shows: Arc<dyn ShowRepository>,
}

impl VenueService {
    pub fn new(venues: Arc<dyn VenueRepository>, shows: Arc<dyn ShowRepository>) -> Self {
        Self { venues, shows }
    }

    /// Every venue grouped by (city, state) with its upcoming show count.
    pub async fn list_by_area(&self, now: DateTime<Utc>) -> Result<Vec<AreaListing>, AppError> {
        let venues = self.venues.list_all().await?;
        let counts = self.shows.count_upcoming_by_venue(upcoming_cutoff(now)).await?;

        Ok(group_by_area(venues)
            .into_iter()
            .map(|area| AreaListing {
                city: area.city,
                state: area.state,
                venues: area.venues.iter().map(|v| entry(v, &counts)).collect(),
            })
            .collect())
    }

    /// Case-insensitive partial match on the venue name.
    pub async fn search(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults, AppError> {
        let venues = self.venues.search_by_name(term.trim()).await?;
        let counts = self.shows.count_upcoming_by_venue(upcoming_cutoff(now)).await?;

        let data = venues.iter().map(|v| entry(v, &counts)).collect();
        Ok(SearchResults::new(term, data))
    }

    /// Venue page with past and upcoming shows.
    pub async fn detail(&self, id: i64, now: DateTime<Utc>) -> Result<VenueDetail, AppError> {
        let venue = self.get(id).await?;
        let split = partition(self.shows.find_by_venue(id).await?, now);

        Ok(VenueDetail {
            venue,
            past_shows_count: split.past.len(),
            upcoming_shows_count: split.upcoming.len(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Venue, AppError> {
        self.venues
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Venue", id))
    }

    /// Most recently listed venues for the home page.
    pub async fn recent(&self, limit: i64, now: DateTime<Utc>) -> Result<Vec<ListingEntry>, AppError> {
        let venues = self.venues.list_recent(limit).await?;
        let counts = self.shows.count_upcoming_by_venue(upcoming_cutoff(now)).await?;
        Ok(venues.iter().map(|v| entry(v, &counts)).collect())
    }

    pub async fn create(&self, venue: &NewVenue) -> Result<Venue, AppError> {
        let created = self.venues.create(venue).await?;
        tracing::info!(venue_id = created.id, name = %created.name, "Venue listed");
        Ok(created)
    }

    pub async fn update(&self, id: i64, venue: &NewVenue) -> Result<Venue, AppError> {
        let updated = self.venues.update(id, venue).await?;
        tracing::info!(venue_id = id, "Venue updated");
        Ok(updated)
    }

    /// Delete a previously loaded venue and its shows.
    pub async fn delete(&self, venue: &Venue) -> Result<(), AppError> {
        self.venues.delete(venue.id).await?;
        tracing::info!(venue_id = venue.id, name = %venue.name, "Venue deleted");
        Ok(())
    }
}

fn entry(venue: &Venue, counts: &HashMap<i64, i64>) -> ListingEntry {
    ListingEntry {
        id: venue.id,
        name: venue.name.clone(),
        num_upcoming_shows: counts.get(&venue.id).copied().unwrap_or(0),
    }
}
