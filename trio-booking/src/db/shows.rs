//! Show repository

use serde::Serialize;
use sqlx::{FromRow, SqlitePool};
use trio_core::DbError;

use crate::models::{NewShow, Scheduled};

/// Show record with the denormalized venue and artist details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl Scheduled for Show {
    fn start_time(&self) -> &str {
        &self.start_time
    }
}

const SHOW_COLUMNS: &str = "id, venue_id, venue_name, venue_image_link, \
     artist_id, artist_name, artist_image_link, start_time";

/// Show repository
pub struct ShowRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ShowRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every show, earliest first.
    pub async fn list(&self) -> Result<Vec<Show>, DbError> {
        let sql = format!("SELECT {} FROM shows ORDER BY start_time, id", SHOW_COLUMNS);
        let rows = sqlx::query_as::<_, Show>(&sql).fetch_all(self.pool).await?;
        Ok(rows)
    }

    /// Shows at one venue, earliest first.
    pub async fn for_venue(&self, venue_id: i64) -> Result<Vec<Show>, DbError> {
        let sql = format!(
            "SELECT {} FROM shows WHERE venue_id = ? ORDER BY start_time, id",
            SHOW_COLUMNS
        );
        let rows = sqlx::query_as::<_, Show>(&sql)
            .bind(venue_id)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Shows by one artist, earliest first.
    pub async fn for_artist(&self, artist_id: i64) -> Result<Vec<Show>, DbError> {
        let sql = format!(
            "SELECT {} FROM shows WHERE artist_id = ? ORDER BY start_time, id",
            SHOW_COLUMNS
        );
        let rows = sqlx::query_as::<_, Show>(&sql)
            .bind(artist_id)
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Book a show, copying the venue and artist names and images onto it.
    ///
    /// Fails with not-found if either side does not exist.
    pub async fn create(&self, new: &NewShow) -> Result<Show, DbError> {
        let mut tx = self.pool.begin().await?;

        let artist: (String, Option<String>) =
            sqlx::query_as("SELECT name, image_link FROM artists WHERE id = ?")
                .bind(new.artist_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| DbError::not_found("artist", new.artist_id))?;

        let venue: (String, Option<String>) =
            sqlx::query_as("SELECT name, image_link FROM venues WHERE id = ?")
                .bind(new.venue_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| DbError::not_found("venue", new.venue_id))?;

        let sql = format!(
            r#"
            INSERT INTO shows (venue_id, venue_name, venue_image_link,
                               artist_id, artist_name, artist_image_link, start_time)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            SHOW_COLUMNS
        );
        let show = sqlx::query_as::<_, Show>(&sql)
            .bind(new.venue_id)
            .bind(&venue.0)
            .bind(&venue.1)
            .bind(new.artist_id)
            .bind(&artist.0)
            .bind(&artist.1)
            .bind(&new.start_time)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            id = show.id,
            venue_id = show.venue_id,
            artist_id = show.artist_id,
            "Show created"
        );
        Ok(show)
    }
}
