//! Integration tests for context persistence across process restarts.

use sky_bulletin::context::{ContextManager, ContextStore, FileContextStore, SystemClock};
use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// FileContextStore round-trips
// ============================================================================

#[test]
fn test_save_then_load_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = FileContextStore::new(snapshot_path(dir.path()));
    let context = sample_context();

    store.save(&context).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded, Some(context));
}

#[test]
fn test_missing_snapshot_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let store = FileContextStore::new(snapshot_path(dir.path()));

    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_corrupt_snapshot_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(dir.path());
    fs::write(&path, "{ this is not json !!").unwrap();

    let store = FileContextStore::new(&path);
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_clear_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let store = FileContextStore::new(snapshot_path(dir.path()));
    store.save(&sample_context()).unwrap();
    assert!(store.path().exists());

    store.clear().unwrap();
    assert!(!store.path().exists());

    // Clearing again is not an error
    store.clear().unwrap();
}

#[test]
fn test_snapshot_wire_format_is_camel_case() {
    let dir = TempDir::new().unwrap();
    let store = FileContextStore::new(snapshot_path(dir.path()));
    store.save(&sample_context()).unwrap();

    let raw = fs::read_to_string(store.path()).unwrap();
    assert!(raw.contains("\"transitionProgress\""));
    assert!(raw.contains("\"isFavorite\""));
    assert!(raw.contains("\"tempC\""));
    assert!(!raw.contains("transition_progress"));
}

#[test]
fn test_out_of_range_snapshot_values_clamp_on_load() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(dir.path());
    // A hand-edited snapshot with values outside the valid ranges
    let raw = r#"{
        "current": {
            "id": "x1",
            "city": "Lagos",
            "country": "PT",
            "tempC": 21,
            "condition": "sunny",
            "highC": 24,
            "lowC": 17,
            "moodPreset": {
                "visualIntensity": "expressive",
                "soundLevel": 9.0,
                "contrastPreference": "standard"
            }
        },
        "transitionProgress": 7.5
    }"#;
    fs::write(&path, raw).unwrap();

    let store = FileContextStore::new(&path);
    let context = store.load().unwrap().expect("snapshot should parse");

    assert_eq!(context.transition_progress, 1.0);
    let preset = context
        .current
        .as_ref()
        .and_then(|loc| loc.mood_preset.as_ref())
        .expect("preset should survive the load");
    assert_eq!(preset.sound_level, 1.0);
}

// ============================================================================
// Manager restart flows over a real file store
// ============================================================================

#[test]
fn test_manager_without_snapshot_elects_home_label() {
    let dir = TempDir::new().unwrap();
    let store = FileContextStore::new(snapshot_path(dir.path()));
    let manager = ContextManager::new(store, SystemClock, &sample_locations());

    let context = manager.context();
    assert_eq!(
        context.current.as_ref().map(|loc| loc.city.as_str()),
        Some("Lisbon")
    );
    assert_eq!(
        context.home.as_ref().map(|loc| loc.city.as_str()),
        Some("Lisbon")
    );
    assert!(context.next.is_none());
    assert_eq!(context.transition_progress, 1.0);

    // The election is persisted immediately
    assert!(snapshot_path(dir.path()).exists());
}

#[test]
fn test_manager_restart_restores_snapshot_verbatim() {
    let dir = TempDir::new().unwrap();
    let locations = sample_locations();

    {
        let store = FileContextStore::new(snapshot_path(dir.path()));
        let mut manager = ContextManager::new(store, SystemClock, &locations);
        manager.set_current(locations[1].clone());
        manager.set_next(Some(locations[2].clone()));
    }

    let store = FileContextStore::new(snapshot_path(dir.path()));
    let manager = ContextManager::new(store, SystemClock, &locations);
    let context = manager.context();

    assert_eq!(
        context.current.as_ref().map(|loc| loc.id.as_str()),
        Some("loc-2")
    );
    assert_eq!(
        context.next.as_ref().map(|loc| loc.id.as_str()),
        Some("loc-3")
    );
    assert_eq!(
        context.home.as_ref().map(|loc| loc.id.as_str()),
        Some("loc-1")
    );
    // The first run quit mid-transition; the snapshot restores as written
    // but no animation restarts
    assert_eq!(context.transition_progress, 0.0);
    assert!(!manager.is_transitioning());
}

#[test]
fn test_manager_heals_corrupt_snapshot_by_reelecting() {
    let dir = TempDir::new().unwrap();
    let path = snapshot_path(dir.path());
    fs::write(&path, "garbage").unwrap();

    let locations = sample_locations();
    let manager = ContextManager::new(FileContextStore::new(&path), SystemClock, &locations);
    assert_eq!(
        manager.context().current.as_ref().map(|loc| loc.id.as_str()),
        Some("loc-1")
    );

    // The re-election overwrote the corrupt file with a valid snapshot
    let reloaded = FileContextStore::new(&path).load().unwrap();
    assert_eq!(reloaded.as_ref(), Some(manager.context()));
}

#[test]
fn test_explicit_accent_survives_restart() {
    let dir = TempDir::new().unwrap();
    let mut locations = sample_locations();
    locations[2] = locations[2].clone().with_mood(accented_preset());

    {
        let store = FileContextStore::new(snapshot_path(dir.path()));
        let mut manager = ContextManager::new(store, SystemClock, &locations);
        manager.set_next(Some(locations[2].clone()));
    }

    let store = FileContextStore::new(snapshot_path(dir.path()));
    let manager = ContextManager::new(store, SystemClock, &locations);

    // The next location's explicit accent drives the header tint
    assert_eq!(manager.accent_color().to_hex(), "#ABCDEF");
}
