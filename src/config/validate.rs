use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    let database = &cfg.database;
    match database.url.as_deref() {
        Some(url) if url.trim().is_empty() => {
            errors.push("database.url must not be empty".to_string());
        }
        None if !cfg!(debug_assertions) => {
            errors.push("database.url is required in release builds".to_string());
        }
        _ => {}
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if database.connect_timeout_secs == 0 {
        errors.push("database.connect_timeout_secs must be > 0".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::{AppConfig, DatabaseConfig};

    fn config_with_database(database: DatabaseConfig) -> AppConfig {
        AppConfig {
            database,
            ..AppConfig::default()
        }
    }

    #[test]
    fn accepts_explicit_database_url() {
        let cfg = config_with_database(DatabaseConfig {
            url: Some("postgres://localhost/todo".to_string()),
            ..DatabaseConfig::default()
        });

        validate(&cfg).expect("config should be valid");
    }

    #[test]
    fn rejects_min_idle_above_max_connections() {
        let cfg = config_with_database(DatabaseConfig {
            url: Some("postgres://localhost/todo".to_string()),
            max_connections: 2,
            min_idle: 5,
            ..DatabaseConfig::default()
        });

        let err = validate(&cfg).expect_err("config should be invalid");
        assert!(err
            .to_string()
            .contains("database.min_idle (5) must be <= database.max_connections (2)"));
    }

    #[test]
    fn reports_every_problem_at_once() {
        let mut cfg = config_with_database(DatabaseConfig {
            url: Some("   ".to_string()),
            max_connections: 0,
            min_idle: 0,
            connect_timeout_secs: 0,
        });
        cfg.general.host = String::new();

        let message = validate(&cfg).expect_err("config should be invalid").to_string();
        assert!(message.contains("general.host must not be empty"));
        assert!(message.contains("database.url must not be empty"));
        assert!(message.contains("database.max_connections must be > 0"));
        assert!(message.contains("database.connect_timeout_secs must be > 0"));
    }
}
