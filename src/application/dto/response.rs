//! Response DTOs
//!
//! View models handed from the services to the HTML views.

use serde::Serialize;

use crate::domain::{Artist, ShowListing, Venue};

/// A venue or artist row in a list or search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingEntry {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing a city and state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaListing {
    pub city: String,
    pub state: String,
    pub venues: Vec<ListingEntry>,
}

/// Result of a name search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<ListingEntry>,
}

impl SearchResults {
    pub fn new(search_term: &str, data: Vec<ListingEntry>) -> Self {
        Self {
            search_term: search_term.trim().to_string(),
            count: data.len(),
            data,
        }
    }
}

/// Venue page: the venue plus its shows split by timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<ShowListing>,
    pub upcoming_shows: Vec<ShowListing>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Artist page: the artist plus its shows split by timing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ShowListing>,
    pub upcoming_shows: Vec<ShowListing>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Home page data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HomeOverview {
    pub recent_venues: Vec<ListingEntry>,
    pub recent_artists: Vec<ListingEntry>,
}
