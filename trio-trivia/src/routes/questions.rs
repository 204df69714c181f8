//! Question endpoints

use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trio_core::http::{ApiError, JsonBody, RowId};
use trio_core::models::{paginate, PageParams, Pagination, SearchTerm};
use trio_core::AppState;

use crate::models::{NewQuestion, Question, QuestionForm};
use crate::repo::{CategoryRepo, QuestionRepo};

/// One page of the question list
#[derive(Debug, Serialize)]
pub struct QuestionsPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    /// Category of each question on the page
    #[serde(rename = "currentCategory")]
    pub current_category: Vec<i64>,
}

/// Response to a deletion: the refreshed list page
#[derive(Debug, Serialize)]
pub struct DeletedQuestion {
    pub success: bool,
    pub question_id: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestion {
    pub success: bool,
    pub created: i64,
}

/// Body of `POST /questions/search`
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: Vec<i64>,
}

fn page_of(all: &[Question], page: Pagination) -> Vec<Question> {
    paginate(all, page).to_vec()
}

/// GET /questions?page=N
async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<QuestionsPage>, ApiError> {
    let page = Pagination::from(params);
    let all = QuestionRepo::new(state.pool()).list().await?;
    let categories = CategoryRepo::new(state.pool()).map().await?;

    let questions = page_of(&all, page);
    let current_category = questions.iter().map(|q| q.category).collect();

    Ok(Json(QuestionsPage {
        success: true,
        total_questions: all.len(),
        questions,
        categories,
        current_category,
    }))
}

/// POST /questions
async fn create_question(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<QuestionForm>,
) -> Result<Json<CreatedQuestion>, ApiError> {
    let new = NewQuestion::try_from(form)?;
    let question = QuestionRepo::new(state.pool()).create(&new).await?;

    Ok(Json(CreatedQuestion {
        success: true,
        created: question.id,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<AppState>,
    RowId(id): RowId,
    Query(params): Query<PageParams>,
) -> Result<Json<DeletedQuestion>, ApiError> {
    let repo = QuestionRepo::new(state.pool());
    repo.delete(id).await?;

    let all = repo.list().await?;
    let categories = CategoryRepo::new(state.pool()).map().await?;

    Ok(Json(DeletedQuestion {
        success: true,
        question_id: id,
        questions: page_of(&all, Pagination::from(params)),
        total_questions: all.len(),
        categories,
        current_category: None,
    }))
}

/// POST /questions/search
async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResults>, ApiError> {
    let term = SearchTerm::new(req.search_term);
    let results = QuestionRepo::new(state.pool()).search(&term).await?;
    tracing::debug!(term = term.as_str(), hits = results.len(), "Question search");

    let questions = page_of(&results, Pagination::from(params));
    let current_category = questions.iter().map(|q| q.category).collect();

    Ok(Json(SearchResults {
        success: true,
        total_questions: results.len(),
        questions,
        current_category,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
