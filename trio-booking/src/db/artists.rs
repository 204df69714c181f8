//! Artist repository

use serde::Serialize;
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use trio_core::models::{fold_case, SearchTerm, LIKE_ESCAPE_CLAUSE};
use trio_core::DbError;

use super::venues::Listing;
use crate::models::NewArtist;

/// Artist record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[sqlx(json)]
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

/// Artist with its upcoming show count, as searched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

const ARTIST_COLUMNS: &str = "id, name, genres, city, state, phone, website, \
     facebook_link, seeking_venue, seeking_description, image_link";

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All artists by name.
    pub async fn list(&self) -> Result<Vec<Listing>, DbError> {
        let rows = sqlx::query_as::<_, Listing>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Artists whose name contains `term`, counting the artist's own shows
    /// after `now`.
    pub async fn search(&self, term: &SearchTerm, now: &str) -> Result<Vec<ArtistSummary>, DbError> {
        let sql = format!(
            r#"
            SELECT a.id, a.name, COUNT(s.id) AS num_upcoming_shows
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id AND s.start_time > ?
            WHERE a.name_folded LIKE ? {}
            GROUP BY a.id, a.name
            ORDER BY a.name, a.id
            "#,
            LIKE_ESCAPE_CLAUSE
        );
        let rows = sqlx::query_as::<_, ArtistSummary>(&sql)
            .bind(now)
            .bind(term.pattern())
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Artist, DbError> {
        let sql = format!("SELECT {} FROM artists WHERE id = ?", ARTIST_COLUMNS);
        sqlx::query_as::<_, Artist>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("artist", id))
    }

    /// The most recently listed artists, newest first.
    pub async fn recent(&self, limit: u32) -> Result<Vec<Listing>, DbError> {
        let rows = sqlx::query_as::<_, Listing>(
            "SELECT id, name FROM artists ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, new: &NewArtist) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO artists (name, name_folded, genres, city, state, phone, website,
                                 facebook_link, seeking_venue, seeking_description, image_link)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        );
        let artist = sqlx::query_as::<_, Artist>(&sql)
            .bind(&new.name)
            .bind(fold_case(&new.name))
            .bind(Json(&new.genres))
            .bind(&new.city)
            .bind(&new.state)
            .bind(&new.phone)
            .bind(&new.website)
            .bind(&new.facebook_link)
            .bind(new.seeking_venue)
            .bind(&new.seeking_description)
            .bind(&new.image_link)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(id = artist.id, name = %artist.name, "Artist created");
        Ok(artist)
    }

    /// Replace every editable field of artist `id`.
    pub async fn update(&self, id: i64, new: &NewArtist) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            UPDATE artists
            SET name = ?, name_folded = ?, genres = ?, city = ?, state = ?, phone = ?, website = ?,
                facebook_link = ?, seeking_venue = ?, seeking_description = ?,
                image_link = ?
            WHERE id = ?
            RETURNING {}
            "#,
            ARTIST_COLUMNS
        );
        let artist = sqlx::query_as::<_, Artist>(&sql)
            .bind(&new.name)
            .bind(fold_case(&new.name))
            .bind(Json(&new.genres))
            .bind(&new.city)
            .bind(&new.state)
            .bind(&new.phone)
            .bind(&new.website)
            .bind(&new.facebook_link)
            .bind(new.seeking_venue)
            .bind(&new.seeking_description)
            .bind(&new.image_link)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("artist", id))?;

        sqlx::query("UPDATE shows SET artist_name = ?, artist_image_link = ? WHERE artist_id = ?")
            .bind(&artist.name)
            .bind(&artist.image_link)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(id, "Artist updated");
        Ok(artist)
    }

    /// Delete an artist and, by cascade, their shows.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM artists WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("artist", id));
        }

        tx.commit().await?;
        tracing::debug!(id, "Artist deleted");
        Ok(())
    }
}
