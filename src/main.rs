//! Denko CLI - track inventory from the command line

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use denko::{Inventory, InventoryStore, config, ui};
use denko::output::OutputMode;
use commands::CommandContext;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "denko")]
#[command(version)]
#[command(about = "Denko Inventory Management - track item counts in a local SQLite database")]
#[command(long_about = r#"
Denko keeps a small inventory in a local SQLite file.

Example usage:
  denko create "blue widget" 5 tools
  denko ls
  denko dec "blue widget"
  denko nm tools
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file
    #[arg(short, long, global = true, env = "DENKO_DB")]
    database: Option<PathBuf>,

    /// Path to the config file (defaults to ./denko.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Adds an item to track
    Create {
        /// Item name
        item: String,

        /// Starting amount
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Namespace to file the item under (defaults to Misc)
        namespace: Option<String>,
    },

    /// Lists the inventory
    #[command(visible_aliases = ["l", "ls"])]
    List,

    /// Updates inventory record
    Update {
        /// Item name
        item: String,

        /// New amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Removes a tracked inventory item
    #[command(visible_aliases = ["rm", "rem"])]
    Remove {
        /// Item name
        item: String,
    },

    /// Prints the total amount of items tracked
    Entries,

    /// Decreases the amount of an item by 1
    #[command(visible_aliases = ["d", "dec"])]
    Decrease {
        /// Item name
        item: String,
    },

    /// Retrieves records by namespace
    #[command(visible_aliases = ["nm", "name"])]
    Namespace {
        /// Namespace to list
        namespace: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging. stdout is reserved for command output.
    let filter = EnvFilter::new(log_directive(cli.verbose, std::env::var("RUST_LOG").ok()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` when set, otherwise `debug` with `--verbose` and `warn` without
fn log_directive(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directive) if !directive.is_empty() => directive,
        _ if verbose => "debug".to_string(),
        _ => "warn".to_string(),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = config::load_config(cli.config.as_deref())?;
    if let (Some(path), None) = (&cli.config, &loaded) {
        ui::warn(&format!("Config file {} not found, using defaults", path.display()));
    }

    let database = config::resolve_database_path(cli.database, loaded.as_ref());
    config::ensure_db_dir(&database)?;
    tracing::debug!("Using database {}", database.display());

    let inventory = Inventory::new(InventoryStore::open(&database)?);
    let ctx = CommandContext {
        inventory: &inventory,
        mode: OutputMode::from_json_flag(cli.json),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Create { item, amount, namespace } => {
            commands::run_create(&ctx, &mut out, &item, &amount, namespace.as_deref())
        }
        Commands::List => commands::run_list(&ctx, &mut out),
        Commands::Update { item, amount } => commands::run_update(&ctx, &mut out, &item, &amount),
        Commands::Remove { item } => commands::run_remove(&ctx, &mut out, &item),
        Commands::Entries => commands::run_entries(&ctx, &mut out),
        Commands::Decrease { item } => commands::run_decrease(&ctx, &mut out, &item),
        Commands::Namespace { namespace } => {
            commands::run_namespace(&ctx, &mut out, namespace.as_deref().unwrap_or(""))
        }
    }
}
