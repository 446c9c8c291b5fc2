//! Spoorthi CLI - serve the fest API and inspect the database

use clap::{Parser, Subcommand};
use spoorthi::config;
use spoorthi::storage::SqliteStore;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "spoorthi")]
#[command(version = "0.1.0")]
#[command(about = "Backend for the Spoorthi fest website - event registrations and photo gallery")]
#[command(long_about = r#"
Spoorthi serves the fest website's JSON API and its built frontend:
  • POST /api/register - event registration (one per USN per event)
  • GET  /api/gallery  - community photos, newest first
  • POST /api/gallery  - upload a photo as a data URI

Example usage:
  spoorthi serve --port 3000 --database spoorthi.db
  spoorthi stats --database spoorthi.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Directory with the built frontend, served for non-API paths
        #[arg(short, long)]
        static_dir: Option<PathBuf>,

        /// Path to a config file (defaults to spoorthi.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show row counts for the database
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "spoorthi.db")]
        database: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve {
            port,
            database,
            static_dir,
            config,
        } => {
            let file_config = config::load_config(config.as_deref())?.unwrap_or_default();
            let port = port.or(file_config.port).unwrap_or(config::DEFAULT_PORT);
            let database = database
                .or(file_config.database.map(PathBuf::from))
                .unwrap_or_else(config::default_database_path);
            let static_dir = static_dir
                .or(file_config.static_dir.map(PathBuf::from))
                .unwrap_or_else(config::default_static_dir);

            config::ensure_db_dir(&database)?;
            tracing::info!(
                "Serving {} on port {} (static: {})",
                database.display(),
                port,
                static_dir.display()
            );
            spoorthi::server::start_server(port, database, static_dir).await?;
        }

        Commands::Stats { database } => {
            let store = SqliteStore::open(&database)?;
            let stats = store.stats()?;

            println!("📊 Spoorthi Statistics ({:?})", database);
            println!("------------------------------------");
            println!("{}", stats);
        }
    }

    Ok(())
}
