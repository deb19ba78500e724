//! CLI command handlers for Sky Bulletin.
//!
//! This module provides headless, scriptable access to the persisted travel
//! context and the location directory for automation and testing.

pub mod common;
pub mod context;
pub mod locations;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use context::ContextArgs;
pub use locations::LocationsArgs;
