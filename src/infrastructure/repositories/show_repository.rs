//! Show Repository Implementation
//!
//! PostgreSQL implementation of the ShowRepository trait. Listings join
//! the venue and artist display fields in a single query.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{NewShow, Show, ShowListing, ShowRepository};
use crate::shared::error::AppError;

const LISTING_SELECT: &str = r#"
    SELECT s.id AS show_id,
           s.venue_id,
           v.name AS venue_name,
           v.image_link AS venue_image_link,
           s.artist_id,
           a.name AS artist_name,
           a.image_link AS artist_image_link,
           s.start_time
    FROM shows s
    INNER JOIN venues v ON v.id = s.venue_id
    INNER JOIN artists a ON a.id = s.artist_id
"#;

#[derive(Debug, sqlx::FromRow)]
struct ShowRow {
    id: i64,
    venue_id: i64,
    artist_id: i64,
    start_time: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl From<ShowRow> for Show {
    fn from(row: ShowRow) -> Self {
        Show {
            id: row.id,
            venue_id: row.venue_id,
            artist_id: row.artist_id,
            start_time: row.start_time,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    show_id: i64,
    venue_id: i64,
    venue_name: String,
    venue_image_link: Option<String>,
    artist_id: i64,
    artist_name: String,
    artist_image_link: Option<String>,
    start_time: DateTime<Utc>,
}

impl From<ListingRow> for ShowListing {
    fn from(row: ListingRow) -> Self {
        ShowListing {
            show_id: row.show_id,
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            venue_image_link: row.venue_image_link,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        }
    }
}

/// PostgreSQL show repository implementation.
#[derive(Clone)]
pub struct PgShowRepository {
    pool: PgPool,
}

impl PgShowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn listings_where(
        &self,
        filter: &str,
        id: Option<i64>,
    ) -> Result<Vec<ShowListing>, AppError> {
        let sql = format!("{LISTING_SELECT} {filter} ORDER BY s.start_time, s.id");
        let mut query = sqlx::query_as::<_, ListingRow>(&sql);
        if let Some(id) = id {
            query = query.bind(id);
        }
        let rows = query.fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(ShowListing::from).collect())
    }

    async fn count_upcoming(
        &self,
        column: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<HashMap<i64, i64>, AppError> {
        let sql = format!(
            "SELECT {column}, COUNT(*) FROM shows WHERE start_time >= $1 GROUP BY {column}"
        );
        let rows = sqlx::query_as::<_, (i64, i64)>(&sql)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().collect())
    }
}

#[async_trait]
impl ShowRepository for PgShowRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ShowListing>, AppError> {
        let sql = format!("{LISTING_SELECT} WHERE s.id = $1");
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(ShowListing::from))
    }

    async fn list_all(&self) -> Result<Vec<ShowListing>, AppError> {
        self.listings_where("", None).await
    }

    async fn find_by_venue(&self, venue_id: i64) -> Result<Vec<ShowListing>, AppError> {
        self.listings_where("WHERE s.venue_id = $1", Some(venue_id))
            .await
    }

    async fn find_by_artist(&self, artist_id: i64) -> Result<Vec<ShowListing>, AppError> {
        self.listings_where("WHERE s.artist_id = $1", Some(artist_id))
            .await
    }

    async fn count_upcoming_by_venue(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<HashMap<i64, i64>, AppError> {
        self.count_upcoming("venue_id", cutoff).await
    }

    async fn count_upcoming_by_artist(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<HashMap<i64, i64>, AppError> {
        self.count_upcoming("artist_id", cutoff).await
    }

    async fn create(&self, show: &NewShow) -> Result<Show, AppError> {
        let row = sqlx::query_as::<_, ShowRow>(
            r#"
            INSERT INTO shows (venue_id, artist_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING id, venue_id, artist_id, start_time, created_at
            "#,
        )
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(show.start_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_foreign_key_violation() {
                    return AppError::Conflict(
                        "Show references a venue or artist that no longer exists".into(),
                    );
                }
            }
            AppError::Database(e)
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM shows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Show", id));
        }

        Ok(())
    }
}
