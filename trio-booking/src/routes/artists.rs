//! Artist pages and mutations

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
use crate::db::{Artist, ArtistRepo, ArtistSummary, Listing, Show, ShowRepo};
use crate::flash::FlashResponse;
use crate::models::{now_stamp, split_by_time, ArtistForm, NewArtist};

#[derive(Debug, Serialize)]
pub struct ArtistList {
    pub artists: Vec<Listing>,
}

/// A show as seen from the artist page
#[derive(Debug, Serialize)]
pub struct VenueAppearance {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<Show> for VenueAppearance {
    fn from(show: Show) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: show.start_time,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueAppearance>,
    pub upcoming_shows: Vec<VenueAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// GET /artists
async fn list_artists(State(state): State<AppState>) -> Result<Json<ArtistList>, ApiError> {
    let artists = ArtistRepo::new(state.pool()).list().await?;
    Ok(Json(ArtistList { artists }))
}

/// POST /artists/search
async fn search_artists(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResults<ArtistSummary>>, ApiError> {
    let term = SearchTerm::new(req.search_term);
    let data = ArtistRepo::new(state.pool())
        .search(&term, &now_stamp())
        .await?;
    tracing::debug!(term = term.as_str(), hits = data.len(), "Artist search");

    Ok(Json(SearchResults {
        search_term: term.as_str().to_owned(),
        count: data.len(),
        data,
    }))
}

/// GET /artists/{id}
async fn show_artist(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<ArtistDetail>, ApiError> {
    let artist = ArtistRepo::new(state.pool()).get(id).await?;
    let shows = ShowRepo::new(state.pool()).for_artist(id).await?;
    let timeline = split_by_time(shows, &now_stamp());

    Ok(Json(ArtistDetail {
        artist,
        past_shows_count: timeline.past.len(),
        upcoming_shows_count: timeline.upcoming.len(),
        past_shows: timeline.past.into_iter().map(Into::into).collect(),
        upcoming_shows: timeline.upcoming.into_iter().map(Into::into).collect(),
    }))
}

async fn insert_artist(state: &AppState, form: ArtistForm) -> Result<Artist, ApiError> {
    let new = NewArtist::try_from(form)?;
    Ok(ArtistRepo::new(state.pool()).create(&new).await?)
}

/// POST /artists/create
async fn create_artist(
    State(state): State<AppState>,
    body: Result<JsonBody<ArtistForm>, ApiError>,
) -> FlashResponse {
    let form = match body {
        Ok(JsonBody(form)) => form,
        Err(err) => return FlashResponse::failure(&err, "An error occurred. Artist could not be listed."),
    };
    let name = form.display_name();

    match insert_artist(&state, form).await {
        Ok(artist) => {
            FlashResponse::success(format!("Artist {} was successfully listed!", artist.name), "/")
        }
        Err(err) => FlashResponse::failure(
            &err,
            format!("An error occurred. Artist {} could not be listed.", name),
        ),
    }
}

/// GET /artists/{id}/edit - current values for the edit form
async fn edit_artist(
    State(state): State<AppState>,
    RowId(id): RowId,
) -> Result<Json<Artist>, ApiError> {
    Ok(Json(ArtistRepo::new(state.pool()).get(id).await?))
}

async fn replace_artist(state: &AppState, id: i64, form: ArtistForm) -> Result<Artist, ApiError> {
    let new = NewArtist::try_from(form)?;
    Ok(ArtistRepo::new(state.pool()).update(id, &new).await?)
}

/// POST /artists/{id}/edit
async fn update_artist(
    State(state): State<AppState>,
    RowId(id): RowId,
    body: Result<JsonBody<ArtistForm>, ApiError>,
) -> FlashResponse {
    let form = match body {
        Ok(JsonBody(form)) => form,
        Err(err) => return FlashResponse::failure(&err, "An error occurred. Artist could not be updated."),
    };
    let name = form.display_name();

    match replace_artist(&state, id, form).await {
        Ok(artist) => FlashResponse::success(
            format!("Artist {} was successfully updated!", artist.name),
            format!("/artists/{}", id),
        ),
        Err(err) => FlashResponse::failure(
            &err,
            format!("An error occurred. Artist {} could not be updated.", name),
        ),
    }
}

/// DELETE /artists/{id}
async fn delete_artist(State(state): State<AppState>, RowId(id): RowId) -> FlashResponse {
    match ArtistRepo::new(state.pool()).delete(id).await {
        Ok(()) => FlashResponse::success(format!("Artist ID {} has been deleted from database.", id), "/"),
        Err(err) => {
            if err.is_not_found() {
                tracing::warn!(id, "Delete of unknown artist");
            }
            FlashResponse::failure(
                &ApiError::from(err),
                format!("An error occurred. Artist ID {} could not be deleted.", id),
            )
        }
    }
}

/// Artist routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists).post(create_artist))
        .route("/artists/create", post(create_artist))
        .route("/artists/search", post(search_artists))
        .route("/artists/{id}", get(show_artist).delete(delete_artist))
        .route("/artists/{id}/edit", get(edit_artist).post(update_artist))
}
