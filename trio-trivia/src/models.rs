//! Trivia records and validated input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::models::{require_int, require_text, IntOrText};
use trio_core::ValidationError;

/// Lowest and highest accepted difficulty
pub const DIFFICULTY_RANGE: (i64, i64) = (1, 5);

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Category record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body of `POST /questions` as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionForm {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<IntOrText>,
    pub difficulty: Option<IntOrText>,
}

/// A question that passed validation and can be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl TryFrom<QuestionForm> for NewQuestion {
    type Error = ValidationError;

    fn try_from(form: QuestionForm) -> Result<Self, Self::Error> {
        let question = require_text("question", form.question.as_deref())?;
        let answer = require_text("answer", form.answer.as_deref())?;
        let category = require_int("category", form.category.as_ref())?;
        let difficulty = require_int("difficulty", form.difficulty.as_ref())?;

        let (min, max) = DIFFICULTY_RANGE;
        if !(min..=max).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min,
                max,
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}
