//! Shared test fixtures for store and CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use sky_bulletin::constants::CONTEXT_FILE_NAME;
use sky_bulletin::models::{
    ConditionKind, ContrastPreference, Location, LocationContext, MoodPreset, RgbColor,
    VisualIntensity, HOME_LABEL,
};
use std::fs;
use std::path::{Path, PathBuf};

/// A small directory: a labeled home base, a work city, and an unlabeled stop.
pub fn sample_locations() -> Vec<Location> {
    vec![
        Location::new("loc-1", "Lisbon", "PT")
            .with_label(HOME_LABEL)
            .with_conditions(19, ConditionKind::Sunny, 24, 15)
            .favorite(),
        Location::new("loc-2", "Berlin", "DE")
            .with_label("Work")
            .with_conditions(11, ConditionKind::Rainy, 13, 8),
        Location::new("loc-3", "Reykjavik", "IS").with_conditions(3, ConditionKind::Snowy, 4, -2),
    ]
}

/// A settled context snapshot with distinct current and home.
pub fn sample_context() -> LocationContext {
    let locations = sample_locations();
    LocationContext {
        current: Some(locations[1].clone()),
        next: None,
        home: Some(locations[0].clone()),
        transition_progress: 1.0,
    }
}

/// An expressive preset with an explicit accent color.
pub fn accented_preset() -> MoodPreset {
    MoodPreset::new(VisualIntensity::Expressive, 0.8, ContrastPreference::Standard)
        .with_accent_color(RgbColor::from_hex("#ABCDEF").unwrap())
}

/// Full path of the context snapshot inside a test config dir.
pub fn snapshot_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONTEXT_FILE_NAME)
}

/// Writes a snapshot JSON file exactly where the app would look for it.
pub fn write_snapshot(config_dir: &Path, context: &LocationContext) {
    fs::create_dir_all(config_dir).unwrap();
    let json = serde_json::to_string_pretty(context).unwrap();
    fs::write(snapshot_path(config_dir), json).unwrap();
}
