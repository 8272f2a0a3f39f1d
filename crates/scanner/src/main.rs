use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use composition_core::{Concern, KeyValueStore, Preference, SkinType};
use database::SqliteStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;

/// Default database location, created on first use.
const DEFAULT_DB_URL: &str = "sqlite:data/scanner.db?mode=rwc";

#[derive(Debug, Parser)]
#[command(name = "scanner")]
#[command(about = "Analyze cosmetic ingredient lists and manage the local profile")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// SQLite database URL
    #[arg(long, global = true, env = "SCANNER_DB_URL", default_value = DEFAULT_DB_URL)]
    db: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze an ingredient list (reads stdin if neither --text nor --file is given)
    Analyze {
        /// Ingredient list text
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// File containing the ingredient list
        #[arg(long)]
        file: Option<PathBuf>,

        /// Product name attached to the result
        #[arg(long)]
        product: Option<String>,

        /// Use the built-in tables only
        #[arg(long)]
        offline: bool,

        /// Save the result to history
        #[arg(long)]
        save: bool,
    },

    /// Look up a product by barcode and analyze its ingredients
    Barcode {
        code: String,

        /// Save the result to history
        #[arg(long)]
        save: bool,
    },

    /// Translate a localized ingredient list to English INCI names
    Translate { text: String },

    /// Show or edit the skin profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Browse saved analyses
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Export or import profile and history
    Backup {
        #[command(subcommand)]
        action: BackupAction,
    },

    /// Ingredients no source could classify
    Missing {
        #[command(subcommand)]
        action: MissingAction,
    },
}

#[derive(Debug, Subcommand)]
enum ProfileAction {
    Show,
    /// oily, dry, sensitive or normal
    ToggleSkin {
        #[arg(value_parser = parse_skin_type)]
        skin_type: SkinType,
    },
    /// e.g. acne, rosacea, enlarged_pores
    ToggleConcern {
        #[arg(value_parser = parse_concern)]
        concern: Concern,
    },
    /// e.g. no_alcohol, vegan, looking_for_retinol
    TogglePreference {
        #[arg(value_parser = parse_preference)]
        preference: Preference,
    },
    /// Mark onboarding as done
    Complete,
    /// Return to the empty profile
    Reset,
}

#[derive(Debug, Subcommand)]
enum HistoryAction {
    List,
    Show { id: String },
    Remove { id: String },
    Clear,
}

#[derive(Debug, Subcommand)]
enum BackupAction {
    /// Write the backup to a file, or stdout without --out
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Import { file: PathBuf },
}

#[derive(Debug, Subcommand)]
enum MissingAction {
    List,
    /// Print the collected records as JSON
    Export,
    Clear,
}

fn parse_skin_type(s: &str) -> Result<SkinType, String> {
    SkinType::parse(s).ok_or_else(|| format!("unknown skin type: {}", s))
}

fn parse_concern(s: &str) -> Result<Concern, String> {
    Concern::parse(s).ok_or_else(|| format!("unknown concern: {}", s))
}

fn parse_preference(s: &str) -> Result<Preference, String> {
    Preference::parse(s).ok_or_else(|| format!("unknown preference: {}", s))
}

/// Make sure the directory holding a file database exists.
fn ensure_db_dir(url: &str) -> std::io::Result<()> {
    let Some(path) = url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = path.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }
    match Path::new(path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    ensure_db_dir(&cli.db)?;
    let store: Arc<dyn KeyValueStore> = Arc::new(SqliteStore::open(&cli.db).await?);
    info!("Using database {}", cli.db);

    let offline = matches!(cli.command, Command::Analyze { offline: true, .. });
    let app = commands::App::new(store, offline);

    let result = app.run(cli.command).await;

    if let Err(e) = app.flush().await {
        warn!("Failed to flush collected ingredients: {}", e);
    }

    result
}
