use sea_orm::{DatabaseConnection, Set, prelude::DateTimeWithTimeZone};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::Todo;
use crate::db::entities::todo::{self, TodoStatus};

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoDao {
    type Entity = Todo;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoDao {
    pub async fn create_todo(
        &self,
        title: String,
        note: Option<String>,
        due_at: Option<DateTimeWithTimeZone>,
        status: TodoStatus,
    ) -> DaoResult<todo::Model> {
        let model = todo::ActiveModel {
            title: Set(title),
            note: Set(note),
            due_at: Set(due_at),
            status: Set(status),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_todos(&self) -> DaoResult<Vec<todo::Model>> {
        self.find_all().await
    }

    /// Overwrites title, note and status. `due_at` is only written when provided.
    pub async fn replace_todo(
        &self,
        id: &Uuid,
        title: String,
        note: Option<String>,
        status: TodoStatus,
        due_at: Option<DateTimeWithTimeZone>,
    ) -> DaoResult<todo::Model> {
        self.update(*id, move |active| {
            active.title = Set(title);
            active.note = Set(note);
            active.status = Set(status);
            if let Some(due_at) = due_at {
                active.due_at = Set(Some(due_at));
            }
        })
        .await
    }

    pub async fn set_status(&self, id: &Uuid, status: TodoStatus) -> DaoResult<todo::Model> {
        self.update(*id, move |active| {
            active.status = Set(status);
        })
        .await
    }

    pub async fn delete_todo(&self, id: &Uuid) -> DaoResult<bool> {
        self.delete(*id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use super::TodoDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::todo::{self, TodoStatus};

    fn ts(hour: u32) -> chrono::DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, hour, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn todo_model(id: Uuid, title: &str, hour: u32) -> todo::Model {
        todo::Model {
            id,
            title: title.to_string(),
            note: None,
            due_at: None,
            status: TodoStatus::Pending,
            created_at: ts(hour),
            updated_at: ts(hour),
        }
    }

    #[tokio::test]
    async fn create_todo_returns_inserted_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[todo_model(id, "Buy milk", 1)]])
            .into_connection();
        let dao = TodoDao::new(&db);

        let created = dao
            .create_todo("Buy milk".to_string(), None, None, TodoStatus::Pending)
            .await
            .expect("insert should succeed");

        assert_eq!(created.id, id);
        assert_eq!(created.title, "Buy milk");
    }

    #[tokio::test]
    async fn list_todos_returns_rows_in_query_order() {
        let newer = todo_model(Uuid::new_v4(), "newer", 2);
        let older = todo_model(Uuid::new_v4(), "older", 1);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[newer.clone(), older.clone()]])
            .into_connection();
        let dao = TodoDao::new(&db);

        let todos = dao.list_todos().await.expect("query should succeed");

        assert_eq!(todos, vec![newer, older]);
    }

    #[tokio::test]
    async fn set_status_reports_missing_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo::Model>::new()])
            .into_connection();
        let dao = TodoDao::new(&db);

        let err = dao
            .set_status(&Uuid::new_v4(), TodoStatus::Completed)
            .await
            .expect_err("missing row should fail");
        assert!(matches!(err, DaoLayerError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_todo_returns_false_when_nothing_matched() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let dao = TodoDao::new(&db);

        let deleted = dao
            .delete_todo(&Uuid::new_v4())
            .await
            .expect("delete should succeed");
        assert!(!deleted);
    }

    #[tokio::test]
    async fn list_todos_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("list failed".to_string())])
            .into_connection();
        let dao = TodoDao::new(&db);

        let err = dao.list_todos().await.expect_err("list should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }

    #[test]
    fn generated_ids_are_unique() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let dao = TodoDao::new(&db);

        assert_ne!(dao.generate_id(), dao.generate_id());
        assert!(!dao.generate_id().is_nil());
    }
}
