use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::db::dao::base_traits::{CreationOrdered, ManagedActiveModel};

/// Completion state of a todo. No other value is ever persisted.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "completed")]
    Completed,
}

impl TodoStatus {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }
}

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub due_at: Option<DateTimeWithTimeZone>,
    pub status: TodoStatus,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}

impl ManagedActiveModel for ActiveModel {
    fn set_id(&mut self, id: Uuid) {
        self.id = Set(id);
    }

    fn set_created_at(&mut self, ts: DateTimeWithTimeZone) {
        self.created_at = Set(ts);
    }

    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone) {
        self.updated_at = Set(ts);
    }
}

impl CreationOrdered for Entity {
    fn created_at_column() -> Column {
        Column::CreatedAt
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Set;
    use uuid::Uuid;

    use super::{ActiveModel, TodoStatus};
    use crate::db::dao::ManagedActiveModel;

    #[test]
    fn stamping_a_new_record_sets_managed_columns() {
        let now = chrono::Utc::now().fixed_offset();
        let id = Uuid::new_v4();
        let mut active = ActiveModel::default();

        active.stamp_new(id, now);

        assert_eq!(active.id, Set(id));
        assert_eq!(active.created_at, Set(now));
        assert_eq!(active.updated_at, Set(now));
    }

    #[test]
    fn status_follows_completed_flag() {
        assert_eq!(TodoStatus::from_completed(true), TodoStatus::Completed);
        assert_eq!(TodoStatus::from_completed(false), TodoStatus::Pending);
    }

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(TodoStatus::default(), TodoStatus::Pending);
    }

    #[test]
    fn status_uses_lowercase_wire_names() {
        let json = serde_json::to_string(&TodoStatus::Completed).expect("status should serialize");
        assert_eq!(json, "\"completed\"");

        let err = serde_json::from_str::<TodoStatus>("\"done\"");
        assert!(err.is_err());
    }
}
