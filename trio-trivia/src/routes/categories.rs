//! Category endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use trio_core::http::{ApiError, RowId};
use trio_core::models::{paginate, PageParams, Pagination};
use trio_core::AppState;

use crate::models::Question;
use crate::repo::{CategoryRepo, QuestionRepo};

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// GET /categories
async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoryList>, ApiError> {
    let categories = CategoryRepo::new(state.pool()).map().await?;
    Ok(Json(CategoryList {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions
async fn questions_in_category(
    State(state): State<AppState>,
    RowId(id): RowId,
    Query(params): Query<PageParams>,
) -> Result<Json<CategoryQuestions>, ApiError> {
    let category = CategoryRepo::new(state.pool()).get(id).await?;
    let questions = QuestionRepo::new(state.pool()).list_by_category(id).await?;

    Ok(Json(CategoryQuestions {
        success: true,
        questions: paginate(&questions, Pagination::from(params)).to_vec(),
        total_questions: questions.len(),
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_in_category))
}
