//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the on-disk file names.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Sky Bulletin";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "sky-bulletin";

/// Directory name under the platform config directory holding all app files.
pub const APP_DIR_NAME: &str = "SkyBulletin";

/// File name of the persisted location-context snapshot.
pub const CONTEXT_FILE_NAME: &str = "location-context.json";

/// File name of the user settings file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
