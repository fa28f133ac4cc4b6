//! Command-line front end for the URL store.
//!
//! # Usage
//!
//! ```bash
//! # Store a mapping
//! url-store save https://example.com ex1
//!
//! # Resolve an alias
//! url-store get ex1
//!
//! # Remove a mapping (asks for confirmation unless -y)
//! url-store delete ex1 -y
//!
//! # Show every mapping, as a table or JSON
//! url-store list
//! url-store list --json
//!
//! # Check that the database opens and the schema is in place
//! url-store db check
//! ```
//!
//! # Environment Variables
//!
//! See [`url_store::config`]. `--storage` overrides `STORAGE_PATH`.

use url_store::application::services::UrlService;
use url_store::config;
use url_store::domain::entities::Record;
use url_store::infrastructure::persistence::SqliteUrlRepository;
use url_store::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// Manage alias to URL mappings.
#[derive(Parser)]
#[command(name = "url-store")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database location (file path, `:memory:`, or `sqlite:` URL)
    #[arg(short, long, global = true)]
    storage: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Store a URL under a new alias
    Save {
        /// Target URL
        url: String,
        /// Alias to store it under
        alias: String,
    },

    /// Print the URL stored under an alias
    Get {
        alias: String,
    },

    /// Delete the mapping for an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all mappings
    List {
        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the database, create the schema if needed, and report the record count
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(storage) = cli.storage {
        config.storage_path = storage;
        config.validate()?;
    }

    telemetry::init_tracing(&config)?;
    config.print_summary();

    let store = Arc::new(
        SqliteUrlRepository::open_with(&config.storage_path, &config.store_options())
            .await
            .with_context(|| format!("Failed to open URL store at '{}'", config.storage_path))?,
    );

    let result = dispatch(cli.command, &store).await;
    store.close().await;
    result
}

async fn dispatch(command: Commands, store: &Arc<SqliteUrlRepository>) -> Result<()> {
    let service = UrlService::new(Arc::clone(store));

    match command {
        Commands::Save { url, alias } => save(&service, &url, &alias).await,
        Commands::Get { alias } => get(&service, &alias).await,
        Commands::Delete { alias, yes } => delete(&service, &alias, yes).await,
        Commands::List { json } => list(&service, json).await,
        Commands::Db { action } => handle_db_action(action, &service, store).await,
    }
}

async fn save(service: &UrlService<SqliteUrlRepository>, url: &str, alias: &str) -> Result<()> {
    let id = service.save(url, alias).await.map_err(|e| {
        if e.is_alias_exists() {
            anyhow::anyhow!("Alias '{}' is already taken, choose another one", alias)
        } else {
            anyhow::Error::new(e).context("Failed to save URL")
        }
    })?;

    println!(
        "{} {} -> {} (id {})",
        "Saved".green().bold(),
        alias.cyan(),
        url,
        id.to_string().bright_black()
    );
    Ok(())
}

async fn get(service: &UrlService<SqliteUrlRepository>, alias: &str) -> Result<()> {
    let url = service
        .get(alias)
        .await
        .with_context(|| format!("Failed to resolve alias '{}'", alias))?;

    // Plain output so it can be piped.
    println!("{url}");
    Ok(())
}

async fn delete(service: &UrlService<SqliteUrlRepository>, alias: &str, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete alias '{}'?", alias))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(alias)
        .await
        .with_context(|| format!("Failed to delete alias '{}'", alias))?;

    println!("{} {}", "Deleted".green().bold(), alias.cyan());
    Ok(())
}

async fn list(service: &UrlService<SqliteUrlRepository>, json: bool) -> Result<()> {
    let mut records = service.list().await.context("Failed to list URLs")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "  No URLs stored".yellow());
        return Ok(());
    }

    records.sort_by_key(|r| r.id);
    print_table(&records);
    Ok(())
}

/// Prints records as an aligned table.
///
/// ```text
///   ID    Alias                URL
///   ─────────────────────────────────────────────────────────────
///   1     ex1                  https://example.com
/// ```
fn print_table(records: &[Record]) {
    println!(
        "  {:<5} {:<20} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(61).bright_black());

    for record in records {
        println!(
            "  {:<5} {:<20} {}",
            record.id.to_string().bright_black(),
            record.alias.cyan(),
            record.url
        );
    }

    println!();
    println!("  Total: {}", records.len().to_string().bright_green().bold());
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    service: &UrlService<SqliteUrlRepository>,
    store: &SqliteUrlRepository,
) -> Result<()> {
    match action {
        DbAction::Check => {
            let records = service.list().await.context("Database check failed")?;

            println!("{}", "Database OK".green().bold());
            println!(
                "  Records: {}",
                records.len().to_string().bright_green().bold()
            );
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(store.pool())
                .await?;
            let journal_mode: String = sqlx::query_scalar("PRAGMA journal_mode")
                .fetch_one(store.pool())
                .await?;

            println!("{}", "Database Information".bright_blue().bold());
            println!();
            println!("  SQLite:       {}", version.bright_white());
            println!("  Journal mode: {}", journal_mode.bright_white());
            println!();
        }
    }

    Ok(())
}
