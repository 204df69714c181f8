//! Venue repository
//!
//! Upcoming-show counts come from a single LEFT JOIN against `shows`
//! filtered on start time, so a venue with no shows still appears with 0.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use trio_core::models::{fold_case, SearchTerm, LIKE_ESCAPE_CLAUSE};
use trio_core::DbError;

use crate::models::NewVenue;

/// Venue record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[sqlx(json)]
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
}

/// Venue with its upcoming show count, as listed and searched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venue summary tagged with its area, before grouping
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VenueInArea {
    pub city: String,
    pub state: String,
    #[sqlx(flatten)]
    pub venue: VenueSummary,
}

/// Id and name, for the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Listing {
    pub id: i64,
    pub name: String,
}

const VENUE_COLUMNS: &str = "id, name, genres, address, city, state, phone, website, \
     facebook_link, seeking_talent, seeking_description, image_link";

/// Venue repository
pub struct VenueRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> VenueRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every venue with its count of shows after `now`, ordered by
    /// state, city, name.
    pub async fn list_with_upcoming(&self, now: &str) -> Result<Vec<VenueInArea>, DbError> {
        let rows = sqlx::query_as::<_, VenueInArea>(
            r#"
            SELECT v.id, v.name, v.city, v.state, COUNT(s.id) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
            GROUP BY v.id, v.name, v.city, v.state
            ORDER BY v.state, v.city, v.name, v.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// Venues whose name contains `term`, case-insensitively.
    pub async fn search(&self, term: &SearchTerm, now: &str) -> Result<Vec<VenueSummary>, DbError> {
        let sql = format!(
            r#"
            SELECT v.id, v.name, COUNT(s.id) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
            WHERE v.name_folded LIKE ? {}
            GROUP BY v.id, v.name
            ORDER BY v.name, v.id
            "#,
            LIKE_ESCAPE_CLAUSE
        );
        let rows = sqlx::query_as::<_, VenueSummary>(&sql)
            .bind(now)
            .bind(term.pattern())
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Venue, DbError> {
        let sql = format!("SELECT {} FROM venues WHERE id = ?", VENUE_COLUMNS);
        sqlx::query_as::<_, Venue>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("venue", id))
    }

    /// The most recently listed venues, newest first.
    pub async fn recent(&self, limit: u32) -> Result<Vec<Listing>, DbError> {
        let rows = sqlx::query_as::<_, Listing>(
            "SELECT id, name FROM venues ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create(&self, new: &NewVenue) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO venues (name, name_folded, genres, address, city, state, phone, website,
                                facebook_link, seeking_talent, seeking_description, image_link)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            VENUE_COLUMNS
        );
        let venue = sqlx::query_as::<_, Venue>(&sql)
            .bind(&new.name)
            .bind(fold_case(&new.name))
            .bind(Json(&new.genres))
            .bind(&new.address)
            .bind(&new.city)
            .bind(&new.state)
            .bind(&new.phone)
            .bind(&new.website)
            .bind(&new.facebook_link)
            .bind(new.seeking_talent)
            .bind(&new.seeking_description)
            .bind(&new.image_link)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(id = venue.id, name = %venue.name, "Venue created");
        Ok(venue)
    }

    /// Replace every editable field of venue `id`.
    pub async fn update(&self, id: i64, new: &NewVenue) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            UPDATE venues
            SET name = ?, name_folded = ?, genres = ?, address = ?, city = ?, state = ?, phone = ?,
                website = ?, facebook_link = ?, seeking_talent = ?,
                seeking_description = ?, image_link = ?
            WHERE id = ?
            RETURNING {}
            "#,
            VENUE_COLUMNS
        );
        let venue = sqlx::query_as::<_, Venue>(&sql)
            .bind(&new.name)
            .bind(fold_case(&new.name))
            .bind(Json(&new.genres))
            .bind(&new.address)
            .bind(&new.city)
            .bind(&new.state)
            .bind(&new.phone)
            .bind(&new.website)
            .bind(&new.facebook_link)
            .bind(new.seeking_talent)
            .bind(&new.seeking_description)
            .bind(&new.image_link)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| DbError::not_found("venue", id))?;

        // Shows carry a copy of the venue's name and image
        sqlx::query("UPDATE shows SET venue_name = ?, venue_image_link = ? WHERE venue_id = ?")
            .bind(&venue.name)
            .bind(&venue.image_link)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(id, "Venue updated");
        Ok(venue)
    }

    /// Delete a venue and, by cascade, its shows.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("venue", id));
        }

        tx.commit().await?;
        tracing::debug!(id, "Venue deleted");
        Ok(())
    }
}
