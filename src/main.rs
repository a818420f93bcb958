//! mirtarget CLI - serve the miRNA target lookup form

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use mirtarget::config::{self, MirtargetConfig};
use mirtarget::storage::SqliteStore;
use mirtarget::ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "mirtarget")]
#[command(version)]
#[command(about = "miRNA gene target lookup - which miRNAs target a gene below a score")]
#[command(long_about = r#"
mirtarget serves a single search form over a miRNA target database:
enter a gene name and a maximum targeting score, get back the miRNAs
that target the gene at or below that score, strongest first.

Example usage:
  mirtarget init
  mirtarget check --database mirna.db
  mirtarget serve --port 8080
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the lookup form over HTTP
    Serve {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Verify the database has the expected tables and show row counts
    Check {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let loaded = config::load_config(cli.config.as_deref())?;
    if loaded.is_none() {
        tracing::debug!("No config file found, using defaults");
    }
    let file_config = loaded.unwrap_or_default();

    match cli.command {
        Commands::Serve { database, host, port } => {
            let settings = file_config.serve_settings(database, host, port)?;
            tracing::info!("Serving lookups from {:?}", settings.database);
            mirtarget::server::start_server(settings).await?;
        }

        Commands::Check { database, format } => {
            let database = file_config.database_path(database);
            run_check(&database, &format)?;
        }

        Commands::Init { force } => {
            let path = cli.config.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &MirtargetConfig::with_defaults(), force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }
    }

    Ok(())
}

fn run_check(database: &Path, format: &str) -> anyhow::Result<()> {
    let store = SqliteStore::open(database)?;
    let missing = store.missing_tables()?;

    if format == "json" {
        let stats = if missing.is_empty() { Some(store.stats()?) } else { None };
        let report = serde_json::json!({
            "database": database.display().to_string(),
            "missing_tables": missing,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui::header(&format!("{} {}", ui::Icons::DATABASE, database.display()));
        if !missing.is_empty() {
            for table in &missing {
                ui::error(&format!("Missing table: {}", table));
            }
        } else {
            let stats = store.stats()?;
            ui::section(&format!("{} Row counts", ui::Icons::STATS));
            println!(
                "{}",
                ui::stats_table(&[
                    ("gene", stats.genes.to_string()),
                    ("mirna", stats.mirnas.to_string()),
                    ("target", stats.targets.to_string()),
                    ("target (scored)", stats.scored_targets.to_string()),
                ])
            );
            if stats.scored_targets == 0 {
                ui::warn("No scored targets; every lookup will find 0 miRNAs");
            }
            ui::success("Database is ready for lookups");
        }
    }

    if !missing.is_empty() {
        anyhow::bail!("database {} is missing {} table(s)", database.display(), missing.len());
    }
    Ok(())
}
