//! Context snapshot persistence.
//!
//! The travel context survives restarts through a [`ContextStore`]. The
//! production store keeps one JSON document on disk; the in-memory store
//! backs tests and ephemeral runs. Corrupt data never takes the app down:
//! an unparsable snapshot is logged and treated as absent.

use anyhow::{Context, Result};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::{APP_DIR_NAME, CONTEXT_FILE_NAME};
use crate::models::LocationContext;

/// Storage port for the travel context snapshot.
///
/// `save` replaces the whole snapshot; there is no merging and no queue,
/// the last write wins.
pub trait ContextStore {
    /// Reads the persisted snapshot. `Ok(None)` means nothing usable is
    /// stored (absent or corrupt); `Err` means the backend itself failed.
    fn load(&self) -> Result<Option<LocationContext>>;

    /// Writes the snapshot, replacing any previous one.
    fn save(&self, context: &LocationContext) -> Result<()>;

    /// Removes the persisted snapshot, if any.
    fn clear(&self) -> Result<()>;
}

impl<T: ContextStore + ?Sized> ContextStore for Box<T> {
    fn load(&self) -> Result<Option<LocationContext>> {
        (**self).load()
    }

    fn save(&self, context: &LocationContext) -> Result<()> {
        (**self).save(context)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// File-backed store holding the snapshot as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct FileContextStore {
    path: PathBuf,
}

impl FileContextStore {
    /// Creates a store at an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the platform default location
    /// (`<config dir>/SkyBulletin/location-context.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be
    /// determined.
    pub fn at_default_location() -> Result<Self> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(Self::new(dir.join(APP_DIR_NAME).join(CONTEXT_FILE_NAME)))
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContextStore for FileContextStore {
    fn load(&self) -> Result<Option<LocationContext>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read context snapshot: {}", self.path.display()))?;
        match serde_json::from_str::<LocationContext>(&raw) {
            Ok(mut context) => {
                context.sanitize();
                Ok(Some(context))
            }
            Err(e) => {
                // A hand-edited or truncated file starts the app fresh
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "discarding unparsable context snapshot"
                );
                Ok(None)
            }
        }
    }

    fn save(&self, context: &LocationContext) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create context directory: {}", parent.display())
            })?;
        }
        let json = serde_json::to_string_pretty(context)
            .context("Failed to serialize context snapshot")?;

        // Write to a temp file then rename, so a crash mid-write cannot
        // leave a truncated snapshot behind
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .with_context(|| format!("Failed to write context snapshot: {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!("Failed to finalize context snapshot: {}", self.path.display())
        })?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove context snapshot: {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

/// In-memory store for tests and `--ephemeral` runs.
///
/// Saves can be armed to fail, which is how the best-effort persistence
/// contract gets exercised.
#[derive(Debug, Default)]
pub struct MemoryContextStore {
    slot: RefCell<Option<LocationContext>>,
    fail_saves: Cell<bool>,
    save_count: Cell<usize>,
}

impl MemoryContextStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a snapshot.
    #[must_use]
    pub fn with_snapshot(context: LocationContext) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(context);
        store
    }

    /// Arms or disarms save failures.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    /// The currently stored snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<LocationContext> {
        self.slot.borrow().clone()
    }

    /// How many saves have succeeded.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

impl ContextStore for MemoryContextStore {
    fn load(&self) -> Result<Option<LocationContext>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, context: &LocationContext) -> Result<()> {
        if self.fail_saves.get() {
            anyhow::bail!("memory store armed to fail saves");
        }
        *self.slot.borrow_mut() = Some(context.clone());
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use tempfile::TempDir;

    fn sample_context() -> LocationContext {
        LocationContext {
            current: Some(Location::new("1", "Littleton", "CO").with_label("Home")),
            next: Some(Location::new("2", "San Francisco", "CA").with_label("Work")),
            home: Some(Location::new("1", "Littleton", "CO").with_label("Home")),
            transition_progress: 1.0,
        }
    }

    #[test]
    fn test_load_absent_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = FileContextStore::new(dir.path().join("location-context.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileContextStore::new(dir.path().join("location-context.json"));
        let context = sample_context();

        store.save(&context).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, context);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = FileContextStore::new(dir.path().join("deep/nested/context.json"));
        store.save(&sample_context()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_corrupt_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("location-context.json");
        fs::write(&path, "{ not valid json !!").unwrap();

        let store = FileContextStore::new(path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_wrong_shape_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("location-context.json");
        fs::write(&path, r#"{"current": "not-an-object"}"#).unwrap();

        let store = FileContextStore::new(path);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_sanitizes_out_of_range_progress() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("location-context.json");
        fs::write(
            &path,
            r#"{"current": null, "next": null, "home": null, "transitionProgress": 12.0}"#,
        )
        .unwrap();

        let store = FileContextStore::new(path);
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.transition_progress, 1.0);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = FileContextStore::new(dir.path().join("location-context.json"));

        store.save(&sample_context()).unwrap();
        let mut second = sample_context();
        second.next = None;
        second.transition_progress = 0.25;
        store.save(&second).unwrap();

        assert_eq!(store.load().unwrap().unwrap(), second);
    }

    #[test]
    fn test_clear_removes_snapshot() {
        let dir = TempDir::new().unwrap();
        let store = FileContextStore::new(dir.path().join("location-context.json"));
        store.save(&sample_context()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_none());
        // Clearing twice is not an error
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store_round_trip_and_failure_arming() {
        let store = MemoryContextStore::new();
        assert!(store.load().unwrap().is_none());

        store.save(&sample_context()).unwrap();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().unwrap().unwrap(), sample_context());

        store.fail_saves(true);
        assert!(store.save(&sample_context()).is_err());
        assert_eq!(store.save_count(), 1);

        store.fail_saves(false);
        store.save(&sample_context()).unwrap();
        assert_eq!(store.save_count(), 2);
    }
}
