//! Quiz endpoint

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use trio_core::http::{ApiError, JsonBody};
use trio_core::models::IntOrText;
use trio_core::AppState;

use crate::models::Question;
use crate::quiz::{pick_unseen, QuizScope};
use crate::repo::{CategoryRepo, QuestionRepo};

/// Message sent once every question in scope has been asked
pub const OUT_OF_QUESTIONS: &str = "Out of questions";

/// Body of `POST /quizzes`
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Category picked in the quiz UI; id 0 is "All"
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: IntOrText,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl QuizResponse {
    fn next(question: Question) -> Self {
        Self {
            success: true,
            question: Some(question),
            message: None,
        }
    }

    fn exhausted() -> Self {
        Self {
            success: false,
            question: None,
            message: Some(OUT_OF_QUESTIONS),
        }
    }
}

/// POST /quizzes - next unseen question in the chosen category
async fn next_question(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let scope = QuizScope::from_category_id(req.quiz_category.id.to_int("quiz_category.id")?);
    if let QuizScope::Category(id) = scope {
        CategoryRepo::new(state.pool()).get(id).await?;
    }

    let candidates = QuestionRepo::new(state.pool()).in_scope(scope).await?;
    let ids: Vec<i64> = candidates.iter().map(|q| q.id).collect();

    let pick = {
        let mut rng = rand::thread_rng();
        pick_unseen(&ids, &req.previous_questions, &mut rng)
    };

    match pick.and_then(|id| candidates.into_iter().find(|q| q.id == id)) {
        Some(question) => Ok(Json(QuizResponse::next(question))),
        None => {
            tracing::debug!(
                ?scope,
                seen = req.previous_questions.len(),
                "Quiz out of questions"
            );
            Ok(Json(QuizResponse::exhausted()))
        }
    }
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
