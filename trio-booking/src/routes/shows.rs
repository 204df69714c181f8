//! Show listing and booking

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use trio_core::http::{ApiError, JsonBody};
use trio_core::AppState;

use crate::db::{Show, ShowRepo};
use crate::flash::FlashResponse;
use crate::models::{NewShow, ShowForm};

#[derive(Debug, Serialize)]
pub struct ShowList {
    pub shows: Vec<Show>,
}

/// GET /shows
async fn list_shows(State(state): State<AppState>) -> Result<Json<ShowList>, ApiError> {
    let shows = ShowRepo::new(state.pool()).list().await?;
    Ok(Json(ShowList { shows }))
}

async fn book_show(state: &AppState, form: ShowForm) -> Result<Show, ApiError> {
    let new = NewShow::try_from(form)?;
    Ok(ShowRepo::new(state.pool()).create(&new).await?)
}

/// POST /shows/create
async fn create_show(
    State(state): State<AppState>,
    body: Result<JsonBody<ShowForm>, ApiError>,
) -> FlashResponse {
    let result = match body {
        Ok(JsonBody(form)) => book_show(&state, form).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(_) => FlashResponse::success("Show was successfully listed!", "/"),
        Err(err) => FlashResponse::failure(&err, "An error occurred. The show could not be listed."),
    }
}

/// Show routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows).post(create_show))
        .route("/shows/create", post(create_show))
}
