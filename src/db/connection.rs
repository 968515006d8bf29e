use anyhow::Context;
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use super::providers::{self, DbProviders, ResolvedDatabase, redact_url};
use crate::config::DatabaseConfig;

pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    connect_with(&providers::default_registry()?, cfg).await
}

/// Opens the pool, runs backend setup and brings the schema up to date.
/// Any failure here leaves the service without a usable store and must abort startup.
pub async fn connect_with(
    registry: &DbProviders,
    cfg: &DatabaseConfig,
) -> anyhow::Result<DatabaseConnection> {
    if cfg.uses_dev_default() {
        warn!(
            url = %redact_url(cfg.url()),
            "database url not set, using development default"
        );
    }

    let ResolvedDatabase { provider, url } = registry.resolve(cfg.url())?;
    let db = provider.connect(&url, cfg).await.with_context(|| {
        format!(
            "cannot open {} database at {}",
            provider.id().as_str(),
            redact_url(&url)
        )
    })?;
    provider
        .post_connect(&db, cfg)
        .await
        .context("database post-connect setup failed")?;

    info!("syncing database schema from entities");
    db.get_schema_registry("todo_server::db::entities::*")
        .sync(&db)
        .await
        .context("schema sync failed")?;
    Ok(db)
}
