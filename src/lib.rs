//! Sky Bulletin Library
//!
//! This library provides core functionality for the Sky Bulletin weather
//! dashboard: the location-context subsystem (mood presets, transitions,
//! persistence), the static forecast dataset, and the Ratatui front end.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod context;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
