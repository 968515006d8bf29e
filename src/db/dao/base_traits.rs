use sea_orm::{EntityTrait, prelude::DateTimeWithTimeZone};
use uuid::Uuid;

/// Columns written by the DAO layer itself, never taken from request payloads.
pub trait ManagedActiveModel {
    fn set_id(&mut self, id: Uuid);
    fn set_created_at(&mut self, ts: DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone);

    /// Stamps a fresh record: both timestamps get the same instant.
    fn stamp_new(&mut self, id: Uuid, now: DateTimeWithTimeZone) {
        self.set_id(id);
        self.set_created_at(now);
        self.set_updated_at(now);
    }
}

/// Entities listed newest first by their creation timestamp.
pub trait CreationOrdered: EntityTrait {
    fn created_at_column() -> Self::Column;
}
