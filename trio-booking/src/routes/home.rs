//! Home page

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trio_core::http::ApiError;
use trio_core::AppState;

use crate::db::{ArtistRepo, Listing, VenueRepo};

/// How many recent venues and artists the home page shows
pub const RECENT_LIMIT: u32 = 10;

#[derive(Debug, Serialize)]
pub struct Home {
    pub venues: Vec<Listing>,
    pub artists: Vec<Listing>,
}

/// GET /
async fn home(State(state): State<AppState>) -> Result<Json<Home>, ApiError> {
    let venues = VenueRepo::new(state.pool()).recent(RECENT_LIMIT).await?;
    let artists = ArtistRepo::new(state.pool()).recent(RECENT_LIMIT).await?;
    Ok(Json(Home { venues, artists }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
