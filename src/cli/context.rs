//! Travel-context inspection and reset commands.

use clap::{Args, Subcommand};
use std::path::Path;

use crate::cli::common::{CliError, CliResult};
use crate::constants::CONTEXT_FILE_NAME;
use crate::context::{ContextStore, FileContextStore};
use crate::models::{Location, LocationContext};

/// Persisted travel-context commands
#[derive(Args, Debug)]
pub struct ContextArgs {
    #[command(subcommand)]
    command: ContextCommand,
}

#[derive(Subcommand, Debug)]
enum ContextCommand {
    /// Display the persisted context snapshot
    Show(ContextShowArgs),
    /// Delete the persisted context snapshot
    Clear(ContextClearArgs),
}

/// Display the persisted context snapshot
#[derive(Args, Debug)]
pub struct ContextShowArgs {
    /// Output as JSON (the exact on-disk wire format)
    #[arg(long)]
    json: bool,
}

/// Delete the persisted context snapshot
#[derive(Args, Debug)]
pub struct ContextClearArgs {
    /// Delete without confirmation
    #[arg(long)]
    yes: bool,
}

impl ContextArgs {
    /// Execute context subcommand against the given config directory
    pub fn execute(&self, config_dir: &Path) -> CliResult<()> {
        let store = FileContextStore::new(config_dir.join(CONTEXT_FILE_NAME));
        match &self.command {
            ContextCommand::Show(args) => args.execute(&store),
            ContextCommand::Clear(args) => args.execute(&store),
        }
    }
}

impl ContextShowArgs {
    /// Execute show command
    pub fn execute(&self, store: &FileContextStore) -> CliResult<()> {
        let snapshot = store
            .load()
            .map_err(|e| CliError::io(format!("Failed to read context snapshot: {e}")))?;

        let Some(context) = snapshot else {
            println!("No persisted context at {}", store.path().display());
            return Ok(());
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&context)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            output_human_readable(&context, store);
        }

        Ok(())
    }
}

impl ContextClearArgs {
    /// Execute clear command
    pub fn execute(&self, store: &FileContextStore) -> CliResult<()> {
        if !store.path().exists() {
            println!("No persisted context at {}", store.path().display());
            return Ok(());
        }

        if !self.yes {
            return Err(CliError::validation(format!(
                "This deletes {}. Re-run with --yes to confirm.",
                store.path().display()
            )));
        }

        store
            .clear()
            .map_err(|e| CliError::io(format!("Failed to delete context snapshot: {e}")))?;

        println!("Deleted {}", store.path().display());
        Ok(())
    }
}

/// Output the snapshot in human-readable format
fn output_human_readable(context: &LocationContext, store: &FileContextStore) {
    println!("Travel Context");
    println!("==============");
    println!();
    println!("  {:<9} {}", "Current:", describe(context.current.as_ref()));
    println!("  {:<9} {}", "Next:", describe(context.next.as_ref()));
    println!("  {:<9} {}", "Home:", describe(context.home.as_ref()));
    println!();
    if context.is_settled() {
        println!("  Transition: settled");
    } else {
        println!(
            "  Transition: {:.0}% complete",
            context.transition_progress * 100.0
        );
    }
    println!("  Snapshot:   {}", store.path().display());
}

fn describe(location: Option<&Location>) -> String {
    match location {
        Some(location) => match &location.label {
            Some(label) => format!("{} ({label})", location.display_name()),
            None => location.display_name(),
        },
        None => "(none)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_store(dir: &TempDir) -> FileContextStore {
        let store = FileContextStore::new(dir.path().join(CONTEXT_FILE_NAME));
        let home = Location::new("1", "Lisbon", "PT").with_label("Home");
        let context = LocationContext {
            current: Some(home.clone()),
            next: None,
            home: Some(home),
            transition_progress: 1.0,
        };
        store.save(&context).unwrap();
        store
    }

    #[test]
    fn test_show_without_snapshot_succeeds() {
        let dir = TempDir::new().unwrap();
        let store = FileContextStore::new(dir.path().join(CONTEXT_FILE_NAME));
        let args = ContextShowArgs { json: false };
        assert!(args.execute(&store).is_ok());
    }

    #[test]
    fn test_show_json_succeeds_with_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let args = ContextShowArgs { json: true };
        assert!(args.execute(&store).is_ok());
    }

    #[test]
    fn test_clear_without_yes_refuses_and_keeps_file() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let args = ContextClearArgs { yes: false };

        let err = args.execute(&store).unwrap_err();
        assert_eq!(err.exit_code(), crate::cli::common::ExitCode::ValidationError);
        assert!(store.path().exists());
    }

    #[test]
    fn test_clear_with_yes_deletes_file() {
        let dir = TempDir::new().unwrap();
        let store = seeded_store(&dir);
        let args = ContextClearArgs { yes: true };

        args.execute(&store).unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_clear_without_snapshot_succeeds() {
        let dir = TempDir::new().unwrap();
        let store = FileContextStore::new(dir.path().join(CONTEXT_FILE_NAME));
        let args = ContextClearArgs { yes: false };
        assert!(args.execute(&store).is_ok());
    }
}
