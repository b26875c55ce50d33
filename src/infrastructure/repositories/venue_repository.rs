//! Venue Repository Implementation
//!
//! PostgreSQL implementation of the VenueRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::like_pattern;
use crate::domain::{NewVenue, Venue, VenueRepository};
use crate::shared::error::AppError;

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, genres, image_link, \
     facebook_link, website_link, seeking_talent, seeking_description, created_at";

/// Database row representation of the venues table.
#[derive(Debug, sqlx::FromRow)]
struct VenueRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    address: String,
    phone: Option<String>,
    genres: Vec<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website_link: Option<String>,
    seeking_talent: bool,
    seeking_description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<VenueRow> for Venue {
    fn from(row: VenueRow) -> Self {
        Venue {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            address: row.address,
            phone: row.phone,
            genres: row.genres,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website_link: row.website_link,
            seeking_talent: row.seeking_talent,
            seeking_description: row.seeking_description,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL venue repository implementation.
#[derive(Clone)]
pub struct PgVenueRepository {
    pool: PgPool,
}

impl PgVenueRepository {
    /// Create a new PgVenueRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, sql: &str) -> Result<Vec<Venue>, AppError> {
        let rows = sqlx::query_as::<_, VenueRow>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Venue::from).collect())
    }
}

#[async_trait]
impl VenueRepository for PgVenueRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Venue>, AppError> {
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1");
        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Venue::from))
    }

    async fn list_all(&self) -> Result<Vec<Venue>, AppError> {
        let sql = format!("SELECT {VENUE_COLUMNS} FROM venues ORDER BY state, city, name, id");
        self.fetch_many(&sql).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>, AppError> {
        let sql = format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE name ILIKE $1 ESCAPE '\\' ORDER BY name, id"
        );
        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Venue>, AppError> {
        let sql = format!(
            "SELECT {VENUE_COLUMNS} FROM venues ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Venue::from).collect())
    }

    async fn create(&self, venue: &NewVenue) -> Result<Venue, AppError> {
        let sql = format!(
            r#"
            INSERT INTO venues (name, city, state, address, phone, genres, image_link,
                                facebook_link, website_link, seeking_talent, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {VENUE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(&venue.name)
            .bind(&venue.city)
            .bind(&venue.state)
            .bind(&venue.address)
            .bind(&venue.phone)
            .bind(venue.genre_labels())
            .bind(&venue.image_link)
            .bind(&venue.facebook_link)
            .bind(&venue.website_link)
            .bind(venue.seeking_talent)
            .bind(&venue.seeking_description)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, venue: &NewVenue) -> Result<Venue, AppError> {
        let sql = format!(
            r#"
            UPDATE venues
            SET name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                genres = $7,
                image_link = $8,
                facebook_link = $9,
                website_link = $10,
                seeking_talent = $11,
                seeking_description = $12
            WHERE id = $1
            RETURNING {VENUE_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, VenueRow>(&sql)
            .bind(id)
            .bind(&venue.name)
            .bind(&venue.city)
            .bind(&venue.state)
            .bind(&venue.address)
            .bind(&venue.phone)
            .bind(venue.genre_labels())
            .bind(&venue.image_link)
            .bind(&venue.facebook_link)
            .bind(&venue.website_link)
            .bind(venue.seeking_talent)
            .bind(&venue.seeking_description)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Venue", id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Venue", id));
        }

        Ok(())
    }
}
