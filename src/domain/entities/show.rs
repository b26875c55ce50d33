//! Show entity and repository trait.
//!
//! A show books one artist into one venue at a start time. Past and
//! upcoming counts are always computed from the `shows` table.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Maps to the `shows` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: DateTime<Utc>,
}

/// A show joined with the display fields of its venue and artist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListing {
    pub show_id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Repository trait for Show data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShowRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<ShowListing>, AppError>;

    /// Every show ordered by start time.
    async fn list_all(&self) -> Result<Vec<ShowListing>, AppError>;

    /// Shows at a venue ordered by start time.
    async fn find_by_venue(&self, venue_id: i64) -> Result<Vec<ShowListing>, AppError>;

    /// Shows by an artist ordered by start time.
    async fn find_by_artist(&self, artist_id: i64) -> Result<Vec<ShowListing>, AppError>;

    /// Number of shows starting at or after `cutoff`, keyed by venue id.
    /// Venues without such shows are absent from the map.
    async fn count_upcoming_by_venue(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<HashMap<i64, i64>, AppError>;

    /// Number of shows starting at or after `cutoff`, keyed by artist id.
    async fn count_upcoming_by_artist(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<HashMap<i64, i64>, AppError>;

    async fn create(&self, show: &NewShow) -> Result<Show, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
