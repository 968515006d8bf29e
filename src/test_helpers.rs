use std::sync::Arc;

use axum::Router;
use sea_orm::MockDatabase;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::connection,
    routes::app,
    state::AppState,
};

/// Router backed by a mock connection with pre-seeded results.
pub fn mock_router(db: MockDatabase) -> Router {
    let state = AppState::new(AppConfig::default(), db.into_connection());
    app(Arc::clone(&state))
}

/// Fresh in-memory SQLite database with the schema synced, on a single connection.
pub async fn sqlite_state() -> anyhow::Result<Arc<AppState>> {
    let database = DatabaseConfig {
        url: Some("sqlite::memory:".to_string()),
        max_connections: 1,
        min_idle: 1,
        ..DatabaseConfig::default()
    };
    let db = connection::connect(&database).await?;
    let config = AppConfig {
        database,
        ..AppConfig::default()
    };
    Ok(AppState::new(config, db))
}
