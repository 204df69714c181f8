//! Todo records and validated input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trio_core::models::{require_int, require_text, IntOrText};
use trio_core::ValidationError;

/// Todo list record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TodoList {
    pub id: i64,
    pub name: String,
}

/// Todo record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub list_id: i64,
}

/// Body of `POST /lists/create`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListForm {
    pub name: Option<String>,
}

/// Body of `POST /todos/create`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoForm {
    pub description: Option<String>,
    pub list_id: Option<IntOrText>,
}

/// Body of `POST /todos/{id}/set_completed`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompletedUpdate {
    pub completed: bool,
}

/// A todo that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub description: String,
    pub list_id: i64,
}

impl TryFrom<TodoForm> for NewTodo {
    type Error = ValidationError;

    fn try_from(form: TodoForm) -> Result<Self, Self::Error> {
        Ok(Self {
            description: require_text("description", form.description.as_deref())?,
            list_id: require_int("list_id", form.list_id.as_ref())?,
        })
    }
}

impl ListForm {
    /// Validated, trimmed list name.
    pub fn name(&self) -> Result<String, ValidationError> {
        require_text("name", self.name.as_deref())
    }
}
