use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use tracing::{debug, warn};

use super::connect_options;
use super::registry::{DbProvider, DbProviderId};
use crate::config::DatabaseConfig;

// Provides gen_random_uuid(). Ids are generated by the application, so this is best effort.
const ENABLE_PGCRYPTO: &str = r#"CREATE EXTENSION IF NOT EXISTS "pgcrypto""#;

pub struct PostgresDbProvider;

#[async_trait]
impl DbProvider for PostgresDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Postgres
    }

    async fn connect(&self, url: &str, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        let db = Database::connect(connect_options(url, cfg)).await?;
        Ok(db)
    }

    async fn post_connect(&self, db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<()> {
        match db.execute_unprepared(ENABLE_PGCRYPTO).await {
            Ok(_) => debug!("pgcrypto extension available"),
            Err(err) => warn!(error = %err, "cannot enable pgcrypto extension"),
        }
        Ok(())
    }
}
