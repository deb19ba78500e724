//! Sky Bulletin - Keyboard-driven terminal weather dashboard
//!
//! Running without a subcommand opens the dashboard. The `context` and
//! `locations` subcommands give scripts headless access to the persisted
//! travel context and the location directory.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sky_bulletin::cli::{ContextArgs, LocationsArgs};
use sky_bulletin::config::{self, Config};
use sky_bulletin::constants::CONTEXT_FILE_NAME;
use sky_bulletin::context::{ContextStore, FileContextStore, MemoryContextStore};
use sky_bulletin::tui;

/// Sky Bulletin - Keyboard-driven terminal weather dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the settings file and context snapshot
    #[arg(long, value_name = "PATH", global = true)]
    config_dir: Option<PathBuf>,

    /// Keep the travel context in memory only; nothing is persisted
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect or clear the persisted travel context
    Context(ContextArgs),
    /// List the location directory with context roles
    Locations(LocationsArgs),
}

fn main() -> Result<()> {
    // Initialize tracing; logs go to stderr so the dashboard owns stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sky_bulletin=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config_dir = config::app_dir(cli.config_dir.as_deref())?;

    if let Some(command) = cli.command {
        let result = match command {
            Commands::Context(args) => args.execute(&config_dir),
            Commands::Locations(args) => args.execute(&config_dir),
        };
        if let Err(error) = result {
            eprintln!("Error: {error}");
            std::process::exit(error.exit_code().code());
        }
        return Ok(());
    }

    run_dashboard(&config_dir, cli.ephemeral)
}

/// Launch the TUI against a file-backed or in-memory context store.
fn run_dashboard(config_dir: &Path, ephemeral: bool) -> Result<()> {
    // A corrupt settings file falls back to defaults instead of blocking launch
    let settings = match Config::load_from(config_dir) {
        Ok(settings) => settings,
        Err(error) => {
            warn!(error = %error, "failed to load settings, using defaults");
            Config::new()
        }
    };

    let store: Box<dyn ContextStore> = if ephemeral {
        Box::new(MemoryContextStore::new())
    } else {
        Box::new(FileContextStore::new(config_dir.join(CONTEXT_FILE_NAME)))
    };

    let mut state = tui::AppState::new(store, settings, config_dir.to_path_buf(), !ephemeral);

    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut state, &mut terminal);

    // Restore terminal before surfacing any loop error
    tui::restore_terminal(terminal)?;

    result
}
