//! Venue entity and repository trait.
//!
//! Maps to the `venues` table:
//! - id: BIGSERIAL PRIMARY KEY
//! - name, city, address: VARCHAR(120) NOT NULL
//! - state: VARCHAR(2) NOT NULL
//! - phone, image_link, facebook_link, website_link: nullable
//! - genres: TEXT[] NOT NULL
//! - seeking_talent: BOOLEAN NOT NULL, seeking_description: TEXT NULL
//! - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Genre;
use crate::shared::error::AppError;

/// A place that hosts shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated venue fields used for both inserts and updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl NewVenue {
    /// Genre labels as stored in the `genres` column.
    pub fn genre_labels(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.as_str().to_string()).collect()
    }
}

/// Repository trait for Venue data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Find a venue by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Venue>, AppError>;

    /// All venues ordered by state, city, then name.
    async fn list_all(&self) -> Result<Vec<Venue>, AppError>;

    /// Case-insensitive substring match on the name, ordered by name.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, AppError>;

    /// Most recently listed venues first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<Venue>, AppError>;

    /// Insert a venue and return the stored row.
    async fn create(&self, venue: &NewVenue) -> Result<Venue, AppError>;

    /// Replace every editable field of an existing venue.
    async fn update(&self, id: i64, venue: &NewVenue) -> Result<Venue, AppError>;

    /// Delete a venue together with its shows.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
