use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use crate::{
    db::dao::TodoDao,
    db::entities::todo::{self, TodoStatus},
    error::AppError,
};

/// Client supplied todo fields, shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct TodoInput {
    pub title: String,
    pub note: Option<String>,
    pub due_at: Option<DateTime<FixedOffset>>,
    pub status: Option<TodoStatus>,
}

#[derive(Clone)]
pub struct TodoService {
    todo_dao: TodoDao,
}

impl TodoService {
    pub fn new(todo_dao: TodoDao) -> Self {
        Self { todo_dao }
    }

    pub async fn create(&self, input: TodoInput) -> Result<todo::Model, AppError> {
        let TodoInput {
            title,
            note,
            due_at,
            status,
        } = input;
        let todo = self
            .todo_dao
            .create_todo(
                title,
                note,
                due_at.map(normalize_due_at),
                status.unwrap_or_default(),
            )
            .await?;
        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    pub async fn list(&self) -> Result<Vec<todo::Model>, AppError> {
        Ok(self.todo_dao.list_todos().await?)
    }

    /// Full overwrite of title, note and status; omitted values reset to their empty
    /// form. `due_at` is the exception: it is only replaced when supplied.
    pub async fn update(&self, id: &Uuid, input: TodoInput) -> Result<todo::Model, AppError> {
        let TodoInput {
            title,
            note,
            due_at,
            status,
        } = input;
        Ok(self
            .todo_dao
            .replace_todo(
                id,
                title,
                note,
                status.unwrap_or_default(),
                due_at.map(normalize_due_at),
            )
            .await?)
    }

    /// Hard delete. Deleting an id that does not exist is not an error.
    pub async fn delete(&self, id: &Uuid) -> Result<(), AppError> {
        let deleted = self.todo_dao.delete_todo(id).await?;
        if !deleted {
            tracing::debug!(%id, "delete matched no todo");
        }
        Ok(())
    }

    pub async fn toggle_complete(
        &self,
        id: &Uuid,
        completed: bool,
    ) -> Result<todo::Model, AppError> {
        Ok(self
            .todo_dao
            .set_status(id, TodoStatus::from_completed(completed))
            .await?)
    }
}

pub fn normalize_due_at(value: DateTime<FixedOffset>) -> DateTimeWithTimeZone {
    value.with_timezone(&Utc).fixed_offset()
}
