//! Artist Repository Implementation
//!
//! PostgreSQL implementation of the ArtistRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::like_pattern;
use crate::domain::{Artist, ArtistRepository, NewArtist};
use crate::shared::error::AppError;

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, \
     facebook_link, website_link, seeking_venue, seeking_description, created_at";

/// Database row representation of the artists table.
#[derive(Debug, sqlx::FromRow)]
struct ArtistRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    phone: Option<String>,
    genres: Vec<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website_link: Option<String>,
    seeking_venue: bool,
    seeking_description: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ArtistRow> for Artist {
    fn from(row: ArtistRow) -> Self {
        Artist {
            id: row.id,
            name: row.name,
            city: row.city,
            state: row.state,
            phone: row.phone,
            genres: row.genres,
            image_link: row.image_link,
            facebook_link: row.facebook_link,
            website_link: row.website_link,
            seeking_venue: row.seeking_venue,
            seeking_description: row.seeking_description,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL artist repository implementation.
#[derive(Clone)]
pub struct PgArtistRepository {
    pool: PgPool,
}

impl PgArtistRepository {
    /// Create a new PgArtistRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_many(&self, sql: &str) -> Result<Vec<Artist>, AppError> {
        let rows = sqlx::query_as::<_, ArtistRow>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Artist::from).collect())
    }
}

#[async_trait]
impl ArtistRepository for PgArtistRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, AppError> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1");
        let row = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Artist::from))
    }

    async fn list_all(&self) -> Result<Vec<Artist>, AppError> {
        let sql = format!("SELECT {ARTIST_COLUMNS} FROM artists ORDER BY name, id");
        self.fetch_many(&sql).await
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>, AppError> {
        let sql = format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE name ILIKE $1 ESCAPE '\\' ORDER BY name, id"
        );
        let rows = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(like_pattern(term))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Artist>, AppError> {
        let sql = format!(
            "SELECT {ARTIST_COLUMNS} FROM artists ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        let rows = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Artist::from).collect())
    }

    async fn create(&self, artist: &NewArtist) -> Result<Artist, AppError> {
        let sql = format!(
            r#"
            INSERT INTO artists (name, city, state, phone, genres, image_link,
                                 facebook_link, website_link, seeking_venue, seeking_description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {ARTIST_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(&artist.name)
            .bind(&artist.city)
            .bind(&artist.state)
            .bind(&artist.phone)
            .bind(artist.genre_labels())
            .bind(&artist.image_link)
            .bind(&artist.facebook_link)
            .bind(&artist.website_link)
            .bind(artist.seeking_venue)
            .bind(&artist.seeking_description)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }

    async fn update(&self, id: i64, artist: &NewArtist) -> Result<Artist, AppError> {
        let sql = format!(
            r#"
            UPDATE artists
            SET name = $2,
                city = $3,
                state = $4,
                phone = $5,
                genres = $6,
                image_link = $7,
                facebook_link = $8,
                website_link = $9,
                seeking_venue = $10,
                seeking_description = $11
            WHERE id = $1
            RETURNING {ARTIST_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ArtistRow>(&sql)
            .bind(id)
            .bind(&artist.name)
            .bind(&artist.city)
            .bind(&artist.state)
            .bind(&artist.phone)
            .bind(artist.genre_labels())
            .bind(&artist.image_link)
            .bind(&artist.facebook_link)
            .bind(&artist.website_link)
            .bind(artist.seeking_venue)
            .bind(&artist.seeking_description)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::not_found("Artist", id))?;

        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Artist", id));
        }

        Ok(())
    }
}
