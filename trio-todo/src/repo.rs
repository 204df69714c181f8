//! Todo list and todo repositories

use sqlx::SqlitePool;
use trio_core::DbError;

use crate::models::{NewTodo, Todo, TodoList};

/// Todo list repository
pub struct ListRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ListRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All lists ordered by id.
    pub async fn list(&self) -> Result<Vec<TodoList>, DbError> {
        let lists = sqlx::query_as::<_, TodoList>("SELECT id, name FROM todolists ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(lists)
    }

    pub async fn get(&self, id: i64) -> Result<TodoList, DbError> {
        sqlx::query_as::<_, TodoList>("SELECT id, name FROM todolists WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("list", id))
    }

    pub async fn create(&self, name: &str) -> Result<TodoList, DbError> {
        let mut tx = self.pool.begin().await?;

        let list = sqlx::query_as::<_, TodoList>(
            "INSERT INTO todolists (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = list.id, "List created");
        Ok(list)
    }

    /// Delete a list and, by cascade, its todos.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM todolists WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("list", id));
        }

        tx.commit().await?;
        tracing::debug!(id, "List deleted");
        Ok(())
    }
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Todos of one list ordered by id.
    pub async fn for_list(&self, list_id: i64) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, description, completed, list_id
            FROM todos
            WHERE list_id = ?
            ORDER BY id
            "#,
        )
        .bind(list_id)
        .fetch_all(self.pool)
        .await?;
        Ok(todos)
    }

    /// Add a todo to an existing list.
    pub async fn create(&self, new: &NewTodo) -> Result<Todo, DbError> {
        let mut tx = self.pool.begin().await?;

        let list_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM todolists WHERE id = ?)")
                .bind(new.list_id)
                .fetch_one(&mut *tx)
                .await?;

        if !list_exists.0 {
            return Err(DbError::not_found("list", new.list_id));
        }

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (description, list_id)
            VALUES (?, ?)
            RETURNING id, description, completed, list_id
            "#,
        )
        .bind(&new.description)
        .bind(new.list_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(id = todo.id, list_id = todo.list_id, "Todo created");
        Ok(todo)
    }

    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<Todo, DbError> {
        let mut tx = self.pool.begin().await?;

        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos SET completed = ?
            WHERE id = ?
            RETURNING id, description, completed, list_id
            "#,
        )
        .bind(completed)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found("todo", id))?;

        tx.commit().await?;
        tracing::debug!(id, completed, "Todo updated");
        Ok(todo)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("todo", id));
        }

        tx.commit().await?;
        tracing::debug!(id, "Todo deleted");
        Ok(())
    }
}
