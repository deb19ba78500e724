//! End-to-end tests for the `context` and `locations` subcommands.

use sky_bulletin::models::LocationContext;
use sky_bulletin::services::locations::LocationDirectory;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

/// Path to the sky-bulletin binary
fn sky_bulletin_bin() -> String {
    std::env::var("CARGO_BIN_EXE_sky-bulletin")
        .unwrap_or_else(|_| "target/debug/sky-bulletin".to_string())
}

/// Creates a command pointed at an isolated config directory.
fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(sky_bulletin_bin());
    cmd.arg("--config-dir");
    cmd.arg(config_dir);
    cmd.args(args);
    cmd
}

// ============================================================================
// context show
// ============================================================================

#[test]
fn test_context_show_without_snapshot() {
    let dir = TempDir::new().unwrap();
    let output = isolated_command(&["context", "show"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "show should succeed without a snapshot. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("No persisted context"),
        "Should report the missing snapshot, got: {stdout}"
    );
}

#[test]
fn test_context_show_human_readable() {
    let dir = TempDir::new().unwrap();
    write_snapshot(dir.path(), &sample_context());

    let output = isolated_command(&["context", "show"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Berlin"), "current city should be listed");
    assert!(stdout.contains("Lisbon"), "home city should be listed");
    assert!(stdout.contains("settled"), "settled transition is reported");
}

#[test]
fn test_context_show_json_matches_wire_format() {
    let dir = TempDir::new().unwrap();
    write_snapshot(dir.path(), &sample_context());

    let output = isolated_command(&["context", "show", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(value["current"]["city"], "Berlin");
    assert_eq!(value["home"]["label"], "Home");
    assert_eq!(value["transitionProgress"], 1.0);
}

// ============================================================================
// context clear
// ============================================================================

#[test]
fn test_context_clear_requires_yes() {
    let dir = TempDir::new().unwrap();
    write_snapshot(dir.path(), &sample_context());

    let output = isolated_command(&["context", "clear"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1), "refusal is a validation error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--yes"), "should point the user at --yes");
    assert!(
        snapshot_path(dir.path()).exists(),
        "snapshot must survive a refused clear"
    );
}

#[test]
fn test_context_clear_with_yes_deletes_snapshot() {
    let dir = TempDir::new().unwrap();
    write_snapshot(dir.path(), &sample_context());

    let output = isolated_command(&["context", "clear", "--yes"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!snapshot_path(dir.path()).exists());
}

#[test]
fn test_context_clear_without_snapshot_succeeds() {
    let dir = TempDir::new().unwrap();
    let output = isolated_command(&["context", "clear"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
}

// ============================================================================
// locations
// ============================================================================

#[test]
fn test_locations_lists_seeded_directory() {
    let dir = TempDir::new().unwrap();
    let output = isolated_command(&["locations"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    for city in ["Littleton", "San Francisco", "Dubai"] {
        assert!(stdout.contains(city), "missing {city} in: {stdout}");
    }
}

#[test]
fn test_locations_json_stamps_roles_from_snapshot() {
    let dir = TempDir::new().unwrap();

    // Persist a context whose current is the seeded San Francisco entry
    let directory = LocationDirectory::with_defaults();
    let home = directory.entries()[0].clone();
    let current = directory.entries()[1].clone();
    let context = LocationContext {
        current: Some(current),
        next: None,
        home: Some(home),
        transition_progress: 1.0,
    };
    write_snapshot(dir.path(), &context);

    let output = isolated_command(&["locations", "--json"], dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(value["count"], 3);
    // Sorted output puts the current location first
    assert_eq!(value["locations"][0]["city"], "San Francisco");
    assert_eq!(value["locations"][0]["role"], "current");
    let roles: Vec<&str> = value["locations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["role"].as_str())
        .collect();
    assert!(roles.contains(&"home"));
}
