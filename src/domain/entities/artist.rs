//! Artist entity and repository trait.
//!
//! Maps to the `artists` table, which mirrors `venues` without an address
//! and with `seeking_venue` in place of `seeking_talent`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Genre;
use crate::shared::error::AppError;

/// A performer that can be booked into shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated artist fields used for both inserts and updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<Genre>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl NewArtist {
    pub fn genre_labels(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.as_str().to_string()).collect()
    }
}

/// Repository trait for Artist data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, AppError>;

    /// All artists ordered by name.
    async fn list_all(&self) -> Result<Vec<Artist>, AppError>;

    /// Case-insensitive substring match on the name, ordered by name.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, AppError>;

    async fn list_recent(&self, limit: i64) -> Result<Vec<Artist>, AppError>;

    async fn create(&self, artist: &NewArtist) -> Result<Artist, AppError>;

    async fn update(&self, id: i64, artist: &NewArtist) -> Result<Artist, AppError>;

    /// Delete an artist together with its shows.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
