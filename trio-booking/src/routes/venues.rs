//! Venue pages and mutations

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use trio_core::http::{ApiError, JsonBody, RowId};
use trio_core::models::SearchTerm;
use trio_core::AppState;

use super::{SearchRequest, SearchResults};
use crate::db::{Show, ShowRepo, Venue, VenueRepo, VenueSummary};
use crate::flash::FlashResponse;
use crate::listing::{group_by_area, Area};
use crate::models::{now_stamp, split_by_time, NewVenue, VenueForm};

#[derive(Debug, Serialize)]
pub struct VenueAreas {
    pub areas: Vec<Area>,
}

/// A show as seen from the venue page
#[derive(Debug, Serialize)]
pub struct ArtistAppearance {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<Show> for ArtistAppearance {
    fn from(show: Show) -> Self {
        Self {
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// GET /venues
async fn list_venues(State(state): State<AppState>) -> Result<Json<VenueAreas>, ApiError> {
    let rows = VenueRepo::new(state.pool())
        .list_with_upcoming(&now_stamp())
        .await?;
    Ok(Json(VenueAreas {
        areas: group_by_area(rows),
    }))
}

/// POST /venues/search
async fn search_venues(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResults<VenueSummary>>, ApiError> {
    let term = SearchTerm::new(req.search_term);
    let data = VenueRepo::new(state.pool())
        .search(&term, &now_stamp())
        .await?;
    tracing::debug!(term = term.as_str(), hits = data.len(), "Venue search");

    Ok(Json(SearchResults {
        search_term: term.as_str().to_owned(),
        count: data.len(),
        data,
    }))
}

/// GET /venues/{id}
async fn show_venue(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<VenueDetail>, ApiError> {
    let venue = VenueRepo::new(state.pool()).get(id).await?;
    let shows = ShowRepo::new(state.pool()).for_venue(id).await?;
    let timeline = split_by_time(shows, &now_stamp());

    Ok(Json(VenueDetail {
        venue,
        past_shows_count: timeline.past.len(),
        upcoming_shows_count: timeline.upcoming.len(),
        past_shows: timeline.past.into_iter().map(Into::into).collect(),
        upcoming_shows: timeline.upcoming.into_iter().map(Into::into).collect(),
    }))
}

async fn insert_venue(state: &AppState, form: VenueForm) -> Result<Venue, ApiError> {
    let new = NewVenue::try_from(form)?;
    Ok(VenueRepo::new(state.pool()).create(&new).await?)
}

/// POST /venues/create
async fn create_venue(
    State(state): State<AppState>,
    body: Result<JsonBody<VenueForm>, ApiError>,
) -> FlashResponse {
    let form = match body {
        Ok(JsonBody(form)) => form,
        Err(err) => return FlashResponse::failure(&err, "An error occurred. Venue could not be listed."),
    };
    let name = form.display_name();

    match insert_venue(&state, form).await {
        Ok(venue) => FlashResponse::success(format!("Venue {} was successfully listed!", venue.name), "/"),
        Err(err) => FlashResponse::failure(
            &err,
            format!("An error occurred. Venue {} could not be listed.", name),
        ),
    }
}

/// GET /venues/{id}/edit - current values for the edit form
async fn edit_venue(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<Venue>, ApiError> {
    Ok(Json(VenueRepo::new(state.pool()).get(id).await?))
}

async fn replace_venue(state: &AppState, id: i64, form: VenueForm) -> Result<Venue, ApiError> {
    let new = NewVenue::try_from(form)?;
    Ok(VenueRepo::new(state.pool()).update(id, &new).await?)
}

/// POST /venues/{id}/edit
async fn update_venue(
    State(state): State<AppState>,
    RowId(id): RowId,
    body: Result<JsonBody<VenueForm>, ApiError>,
) -> FlashResponse {
    let form = match body {
        Ok(JsonBody(form)) => form,
        Err(err) => return FlashResponse::failure(&err, "An error occurred. Venue could not be updated."),
    };
    let name = form.display_name();

    match replace_venue(&state, id, form).await {
        Ok(venue) => FlashResponse::success(
            format!("Venue {} was successfully updated!", venue.name),
            format!("/venues/{}", id),
        ),
        Err(err) => FlashResponse::failure(
            &err,
            format!("An error occurred. Venue {} could not be updated.", name),
        ),
    }
}

/// DELETE /venues/{id}
async fn delete_venue(State(state): State<AppState>, RowId(id): RowId) -> FlashResponse {
    match VenueRepo::new(state.pool()).delete(id).await {
        Ok(()) => FlashResponse::success(format!("Venue ID {} has been deleted from database.", id), "/"),
        Err(err) => {
            if err.is_not_found() {
                tracing::warn!(id, "Delete of unknown venue");
            }
            FlashResponse::failure(
                &ApiError::from(err),
                format!("An error occurred. Venue ID {} could not be deleted.", id),
            )
        }
    }
}

/// Venue routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues).post(create_venue))
        .route("/venues/create", post(create_venue))
        .route("/venues/search", post(search_venues))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue).post(update_venue))
}
