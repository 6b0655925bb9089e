pub mod app;
pub mod extract;
pub mod handlers;

use anyhow::Result;
use clap::Subcommand;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::CatalogConfig;
use crate::database::{
    establish_connection, get_database_url, migrations::Migrator, setup_database,
};

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

pub async fn start_server(config: &CatalogConfig) -> Result<()> {
    let db = establish_connection(&config.database_url()).await?;
    setup_database(&db).await?;

    let app = app::create_app(db.clone(), config.cors_origin.as_deref()).await?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    info!("Server running on http://0.0.0.0:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("Database connection closed");

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

fn log_routes() {
    info!("API Endpoints:");
    info!("  /health                          - Health check");
    info!("  /producers                       - List or look up producers");
    info!("  /producers/:id                   - Producer with every related record");
    info!("  /producers/filters/{{cities,stores}}");
    info!("  /products                        - List or look up products");
    info!("  /products/:id                    - Product with every related record");
    info!("  /products/filters/{{brands,manufacturers}}");
}

pub async fn migrate_database(database: &str, direction: MigrateDirection) -> Result<()> {
    let database_url = get_database_url(Some(database));
    let db = establish_connection(&database_url).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(&db, None).await?;
            Migrator::up(&db, None).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}
