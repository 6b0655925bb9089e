use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use catalog::config::{CatalogConfig, ConfigOverrides};
use catalog::database::{establish_connection, get_database_url, seed_data, setup_database};
use catalog::server::{self, MigrateDirection};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[clap(short, long, env = "PORT")]
        port: Option<u16>,
        /// Connection URL or SQLite file path
        #[clap(short, long, env = "DATABASE_URL")]
        database: Option<String>,
        #[clap(long, env = "CORS_ORIGIN")]
        cors_origin: Option<String>,
        /// YAML file with port, database and cors_origin
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Load the sample producers and products
    Seed {
        #[clap(short, long, env = "DATABASE_URL", default_value = "catalog.db")]
        database: String,
        /// Commit every insert on its own
        #[clap(long)]
        no_transaction: bool,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init {
        #[clap(short, long, env = "DATABASE_URL", default_value = "catalog.db")]
        database: String,
    },
    Migrate {
        #[clap(subcommand)]
        direction: MigrateDirection,
        #[clap(short, long, env = "DATABASE_URL", default_value = "catalog.db")]
        database: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            port,
            database,
            cors_origin,
            config,
        } => {
            let config = CatalogConfig::resolve(
                config.as_deref(),
                ConfigOverrides {
                    port,
                    database,
                    cors_origin,
                },
            )?;
            info!("Starting server on port {}", config.port);
            server::start_server(&config).await?;
        }
        Commands::Db { command } => match command {
            DbCommands::Init { database } => {
                info!("Initializing database: {}", database);
                server::migrate_database(&database, MigrateDirection::Up).await?;
            }
            DbCommands::Migrate {
                direction,
                database,
            } => {
                info!("Running database migration: {:?}", direction);
                server::migrate_database(&database, direction).await?;
            }
        },
        Commands::Seed {
            database,
            no_transaction,
        } => {
            info!("Seeding database: {}", database);
            let db = establish_connection(&get_database_url(Some(&database))).await?;
            setup_database(&db).await?;
            seed_data::seed_catalog(&db, !no_transaction).await?;
            db.close().await?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_deref()
        .unwrap_or("info")
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("sqlx=warn,{}", log_level)))
        .without_time()
        .init();
}
