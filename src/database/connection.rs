use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::info;

use super::migrations::Migrator;

pub const DEFAULT_DATABASE: &str = "catalog.db";

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);

    if is_memory_url(database_url) {
        // Each pooled connection to sqlite::memory: would open its own empty database
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(20)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(3600));
    }
    opt.sqlx_logging(false);

    Database::connect(opt).await
}

/// Bring the schema up to date.
pub async fn setup_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    info!("Database migrations completed");
    Ok(())
}

/// Accepts either a full connection URL or a SQLite file path.
pub fn get_database_url(database: Option<&str>) -> String {
    match database {
        Some(":memory:") => "sqlite::memory:".to_string(),
        Some(url) if is_connection_url(url) => url.to_string(),
        Some(path) => format!("sqlite://{}?mode=rwc", path),
        None => format!("sqlite://{}?mode=rwc", DEFAULT_DATABASE),
    }
}

fn is_connection_url(value: &str) -> bool {
    value.starts_with("sqlite:")
        || value.starts_with("postgres://")
        || value.starts_with("postgresql://")
}

fn is_memory_url(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_resolution() {
        assert_eq!(get_database_url(Some(":memory:")), "sqlite::memory:");
        assert_eq!(
            get_database_url(Some("data/catalog.db")),
            "sqlite://data/catalog.db?mode=rwc"
        );
        assert_eq!(
            get_database_url(Some("postgres://postgres@localhost:5432/ValuebudsDB")),
            "postgres://postgres@localhost:5432/ValuebudsDB"
        );
        assert_eq!(get_database_url(None), "sqlite://catalog.db?mode=rwc");
    }

    #[test]
    fn test_memory_urls_are_detected() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(!is_memory_url("sqlite://catalog.db?mode=rwc"));
        assert!(!is_memory_url("postgres://localhost/:memory:"));
    }
}
