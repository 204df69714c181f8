//! Question and category repositories
//!
//! - Reads go straight to the pool
//! - Writes run in a transaction that rolls back on any early return

use std::collections::BTreeMap;

use sqlx::SqlitePool;
use trio_core::models::{fold_case, SearchTerm, LIKE_ESCAPE_CLAUSE};
use trio_core::DbError;

use crate::models::{Category, NewQuestion, Question};
use crate::quiz::QuizScope;

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All questions ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(questions)
    }

    /// Questions of one category ordered by id.
    pub async fn list_by_category(&self, category: i64) -> Result<Vec<Question>, DbError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool)
        .await?;
        Ok(questions)
    }

    /// Questions whose text contains `term`, case-insensitively.
    pub async fn search(&self, term: &SearchTerm) -> Result<Vec<Question>, DbError> {
        let sql = format!(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question_folded LIKE ? {}
            ORDER BY id
            "#,
            LIKE_ESCAPE_CLAUSE
        );
        let questions = sqlx::query_as::<_, Question>(&sql)
            .bind(term.pattern())
            .fetch_all(self.pool)
            .await?;
        Ok(questions)
    }

    /// Every question a quiz in `scope` may draw from, read in one statement.
    pub async fn in_scope(&self, scope: QuizScope) -> Result<Vec<Question>, DbError> {
        match scope {
            QuizScope::All => self.list().await,
            QuizScope::Category(category) => self.list_by_category(category).await,
        }
    }

    /// Insert a question. An unknown category fails on the foreign key.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let mut tx = self.pool.begin().await?;

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, question_folded, answer, category, difficulty)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(fold_case(&new.question))
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = question.id, "Question created");
        Ok(question)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", id));
        }

        tx.commit().await?;
        tracing::debug!(id, "Question deleted");
        Ok(())
    }
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(categories)
    }

    /// Categories keyed by id, the shape the quiz frontend consumes.
    pub async fn map(&self) -> Result<BTreeMap<i64, String>, DbError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .map(|c| (c.id, c.kind))
            .collect())
    }

    pub async fn get(&self, id: i64) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("category", id))
    }
}
